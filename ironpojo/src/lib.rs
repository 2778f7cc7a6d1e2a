//! # IronPojo
//!
//! Java value-object (POJO) source generator driven by immutable struct
//! blueprints.
//!
//! IronPojo maps a declarative description of a record (name, typed
//! attributes, constant flags) and a formatting profile to the complete
//! source text of a Java value-object class: fields, constructor,
//! accessors and the standard `equals`/`hashCode`/`toString` methods.
//!
//! ## Quick Start
//!
//! ```
//! use ironpojo::prelude::*;
//!
//! let model = Struct::builder()
//!     .name("Person")
//!     .attribute(StructAttribute::create("id", "long", true)?)
//!     .attribute(StructAttribute::create("name", "String", false)?)
//!     .create()?;
//!
//! let profile = GenerationProfile::default();
//! let source = generate(&model, &profile);
//! assert!(source.contains("public long getId()"));
//! # Ok::<(), StructError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Struct and attribute blueprints with a staged builder
//! - [`generator`] - Generation profile, context and class emitter

pub mod prelude;

/// Struct blueprint model.
pub mod model {
    pub use ironpojo_struct::*;
}

/// Source generation engine.
pub mod generator {
    pub use ironpojo_generator::*;
}

// Re-export commonly used items at the crate root
pub use ironpojo_generator::{ClassGenerator, GenerationProfile, generate};
pub use ironpojo_struct::{Builder, Struct, StructAttribute, StructError};
