//! # IronPojo Struct
//!
//! Struct blueprint model for value-object generation.
//!
//! This crate provides:
//! - Attribute descriptors for typed, optionally-constant fields
//! - Struct descriptors with a staged builder
//! - Argument validation errors
//!
//! All model types are immutable value objects: once constructed they are
//! never mutated and may be shared freely across threads.

pub mod attribute;
pub mod error;
pub mod struct_def;

pub use attribute::StructAttribute;
pub use error::StructError;
pub use struct_def::{Builder, Struct};
