//! Naming conventions for generated members.

/// Capitalizes the first character of a string.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the accessor method name for an attribute name.
///
/// The transform is fixed and deterministic: `id` becomes `getId`.
#[must_use]
pub fn accessor_name(attribute_name: &str) -> String {
    format!("get{}", capitalize(attribute_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("id"), "Id");
        assert_eq!(capitalize("address"), "Address");
        assert_eq!(capitalize("X"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_accessor_name() {
        assert_eq!(accessor_name("id"), "getId");
        assert_eq!(accessor_name("name"), "getName");
        assert_eq!(accessor_name("zipCode"), "getZipCode");
    }
}
