//! # IronPojo Generator
//!
//! Java value-object source generation from struct blueprints.
//!
//! This crate provides:
//! - A generation profile for formatting options and import lines
//! - A line-oriented generation context with prefix indentation
//! - A class generator emitting fields, constructor, accessors and the
//!   standard `equals`/`hashCode`/`toString` methods
//!
//! Generation is a pure, synchronous transform: given the same model and
//! profile it always returns byte-identical output and performs no I/O.

pub mod context;
pub mod java;
pub mod naming;
pub mod profile;

pub use context::GenerationContext;
pub use java::ClassGenerator;
pub use profile::GenerationProfile;

use ironpojo_struct::Struct;

/// Generates the source text of one value-object class.
///
/// # Arguments
/// * `model` - Struct blueprint to generate from
/// * `profile` - Formatting configuration
///
/// # Returns
/// The complete, newline-separated class source.
#[must_use]
pub fn generate(model: &Struct, profile: &GenerationProfile) -> String {
    ClassGenerator::new(model, profile).generate()
}
