//! Example generating a `Person` value-object class.
//!
//! Run with: `cargo run --example person`

use ironpojo::prelude::*;
use std::collections::HashMap;

fn main() -> Result<(), StructError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let model = Struct::builder()
        .name("Person")
        .attribute(StructAttribute::create("id", "long", true)?)
        .attribute(StructAttribute::create("name", "String", false)?)
        .attribute(StructAttribute::create("address", "Address", false)?)
        .create()?;

    let mut options = HashMap::new();
    options.insert(GenerationProfile::LINE_PREFIX.to_string(), "  ".to_string());
    let profile = GenerationProfile::create(Vec::new(), options);

    println!("{}", generate(&model, &profile));
    Ok(())
}
