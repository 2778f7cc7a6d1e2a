//! Generation profile configuration.

use std::collections::HashMap;

/// Immutable configuration bag parameterizing generated output.
///
/// A profile carries a set of recognized formatting options and an ordered
/// list of import lines that are emitted verbatim ahead of the class body.
/// Unknown option keys are preserved and can be read back through
/// [`GenerationProfile::option`], but have no effect on generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationProfile {
    /// Import lines emitted before the class body, in insertion order.
    import_lines: Vec<String>,
    /// Formatting options keyed by option name.
    options: HashMap<String, String>,
}

impl GenerationProfile {
    /// Option key for the string prepended to every emitted line.
    ///
    /// Defaults to the empty string when absent.
    pub const LINE_PREFIX: &'static str = "line-prefix";

    /// Creates a profile from import lines and options.
    ///
    /// Empty collections are valid; [`GenerationProfile::default`] is
    /// equivalent to a profile with neither imports nor options.
    #[must_use]
    pub fn create(import_lines: Vec<String>, options: HashMap<String, String>) -> Self {
        Self {
            import_lines,
            options,
        }
    }

    /// Returns the raw value for an option key, if present.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Returns the resolved line prefix, falling back to the default.
    #[must_use]
    pub fn line_prefix(&self) -> &str {
        self.option(Self::LINE_PREFIX).unwrap_or("")
    }

    /// Returns the import lines in insertion order.
    pub fn import_lines(&self) -> impl Iterator<Item = &str> {
        self.import_lines.iter().map(String::as_str)
    }
}
