//! Generator configuration.

/// Header line written at the top of every generated unit by default.
pub const DEFAULT_HEADER: &str = "// <auto-generated />";

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Indentation unit.
    pub indent: String,
    /// First line of every unit, if any.
    pub header: Option<String>,
    /// Validate declarations before collecting them.
    pub validate: bool,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            indent: "    ".to_string(),
            header: Some(DEFAULT_HEADER.to_string()),
            validate: true,
        }
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Indents with the given number of spaces.
    #[must_use]
    pub fn with_indent_width(self, width: usize) -> Self {
        self.with_indent(" ".repeat(width))
    }

    /// Sets or clears the header line.
    #[must_use]
    pub fn with_header(mut self, header: Option<String>) -> Self {
        self.header = header;
        self
    }

    /// Enables or disables declaration validation.
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.indent, "    ");
        assert_eq!(config.header.as_deref(), Some(DEFAULT_HEADER));
        assert!(config.validate);
    }

    #[test]
    fn test_builder_methods() {
        let config = GeneratorConfig::new()
            .with_indent_width(2)
            .with_header(None)
            .with_validation(false);

        assert_eq!(config.indent, "  ");
        assert!(config.header.is_none());
        assert!(!config.validate);
    }
}
