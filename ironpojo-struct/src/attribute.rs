//! Attribute descriptor for struct blueprints.

use crate::error::StructError;

/// Immutable description of one field of a struct blueprint.
///
/// An attribute carries the field name, the declared type name and a flag
/// indicating whether the field is a constant. The type name is opaque to
/// the generator; no target-language validation is performed on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructAttribute {
    /// Attribute name.
    name: String,
    /// Declared type name (opaque).
    type_name: String,
    /// Whether the attribute is emitted as final.
    constant: bool,
}

impl StructAttribute {
    /// Creates an attribute descriptor.
    ///
    /// # Errors
    /// Returns [`StructError::EmptyIdentifier`] if `name` or `type_name`
    /// is empty.
    pub fn create(
        name: impl Into<String>,
        type_name: impl Into<String>,
        constant: bool,
    ) -> Result<Self, StructError> {
        let name = name.into();
        let type_name = type_name.into();

        if name.is_empty() {
            return Err(StructError::empty("name"));
        }
        if type_name.is_empty() {
            return Err(StructError::empty("type name"));
        }

        Ok(Self {
            name,
            type_name,
            constant,
        })
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns whether the attribute is constant.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.constant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_attribute() {
        let attr = StructAttribute::create("id", "long", true).unwrap();
        assert_eq!(attr.name(), "id");
        assert_eq!(attr.type_name(), "long");
        assert!(attr.is_constant());
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let err = StructAttribute::create("", "long", false).unwrap_err();
        assert_eq!(err, StructError::empty("name"));
    }

    #[test]
    fn test_create_rejects_empty_type_name() {
        let err = StructAttribute::create("id", "", false).unwrap_err();
        assert_eq!(err, StructError::empty("type name"));
    }

    #[test]
    fn test_structural_equality() {
        let a = StructAttribute::create("id", "long", true).unwrap();
        let b = StructAttribute::create("id", "long", true).unwrap();
        let c = StructAttribute::create("id", "long", false).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_debug_exposes_all_fields() {
        let attr = StructAttribute::create("name", "String", false).unwrap();
        let debug = format!("{attr:?}");
        assert!(debug.contains("name"));
        assert!(debug.contains("String"));
        assert!(debug.contains("false"));
    }
}
