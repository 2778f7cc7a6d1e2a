//! Java source generation modules.

pub mod class;

pub use class::ClassGenerator;
