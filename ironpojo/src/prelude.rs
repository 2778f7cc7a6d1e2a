//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use ironpojo::prelude::*;
//! ```

// Model types
pub use ironpojo_struct::{Builder, Struct, StructAttribute, StructError};

// Generator types
pub use ironpojo_generator::{ClassGenerator, GenerationContext, GenerationProfile, generate};
