//! Struct blueprint descriptor and its builder.

use crate::attribute::StructAttribute;
use crate::error::StructError;

/// Immutable description of a struct blueprint.
///
/// A struct carries a name, an ordered sequence of attributes and a
/// constant flag. Attribute order is significant: it is preserved exactly
/// as given and drives the order of fields in generated output. Duplicate
/// attribute names are permitted and kept as-is; the generator does not
/// deduplicate them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Struct {
    /// Struct name.
    name: String,
    /// Ordered attribute sequence.
    attributes: Vec<StructAttribute>,
    /// Whether the whole struct is declared constant.
    constant: bool,
}

impl Struct {
    /// Creates a struct with the given name and no attributes.
    #[must_use]
    pub fn create(name: impl Into<String>) -> Self {
        Self::with_constant(name, Vec::new(), false)
    }

    /// Creates a non-constant struct with the given name and attributes.
    #[must_use]
    pub fn with_attributes(name: impl Into<String>, attributes: Vec<StructAttribute>) -> Self {
        Self::with_constant(name, attributes, false)
    }

    /// Creates a struct with all available arguments.
    #[must_use]
    pub fn with_constant(
        name: impl Into<String>,
        attributes: Vec<StructAttribute>,
        constant: bool,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            constant,
        }
    }

    /// Creates an independently-owned copy of the given struct.
    ///
    /// The copy compares structurally equal to the source but shares no
    /// storage with it.
    #[must_use]
    pub fn copy_of(source: &Self) -> Self {
        source.clone()
    }

    /// Returns a builder for staged construction.
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Returns the struct name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the struct itself is declared constant.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.constant
    }

    /// Returns whether the struct is effectively immutable.
    ///
    /// True when the struct is declared constant or every attribute is.
    /// An empty attribute sequence counts as all-constant, so a struct
    /// with no attributes is immutable.
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        self.constant || self.attributes.iter().all(StructAttribute::is_constant)
    }

    /// Returns a fresh traversal over the attributes in insertion order.
    ///
    /// Each call produces a new iterator; the backing sequence is never
    /// exposed mutably.
    pub fn attributes(&self) -> impl Iterator<Item = &StructAttribute> {
        self.attributes.iter()
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

/// Staged builder producing an immutable [`Struct`].
///
/// Accumulates a name, a constant flag and attributes, then validates and
/// moves the accumulated state into the product on [`Builder::create`].
#[derive(Debug, Default)]
pub struct Builder {
    name: Option<String>,
    constant: bool,
    attributes: Vec<StructAttribute>,
}

impl Builder {
    /// Creates a new builder with no name, no attributes and
    /// `constant = false`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the struct name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the constant flag.
    #[must_use]
    pub fn constant(mut self, constant: bool) -> Self {
        self.constant = constant;
        self
    }

    /// Replaces the accumulated attribute sequence.
    #[must_use]
    pub fn attributes(mut self, attributes: Vec<StructAttribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Appends a single attribute.
    ///
    /// Duplicate names are accepted; the sequence is kept exactly as
    /// accumulated.
    #[must_use]
    pub fn attribute(mut self, attribute: StructAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Validates the accumulated state and produces the struct.
    ///
    /// # Errors
    /// Returns [`StructError::MissingName`] if no name was supplied.
    pub fn create(self) -> Result<Struct, StructError> {
        let name = self.name.ok_or(StructError::MissingName)?;
        Ok(Struct::with_constant(name, self.attributes, self.constant))
    }
}
