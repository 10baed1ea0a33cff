//! Expansion configuration

use flatco_core::lang::conventions;

/// Options of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    /// File identifier written into line markers
    pub file_name: String,
    /// Basename of the dialect header whose first `#include` is commented out
    pub header_name: String,
    /// Whether to emit `#line` markers at all
    pub line_markers: bool,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            file_name: "<stdin>".to_string(),
            header_name: conventions::HEADER_BASENAME.to_string(),
            line_markers: true,
        }
    }
}

impl ExpandConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file identifier used in line markers
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Set the dialect header basename
    pub fn with_header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = name.into();
        self
    }

    /// Enable or disable line markers
    pub fn with_line_markers(mut self, enabled: bool) -> Self {
        self.line_markers = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExpandConfig::default();
        assert_eq!(config.file_name, "<stdin>");
        assert_eq!(config.header_name, "flatco.h");
        assert!(config.line_markers);
        assert_eq!(ExpandConfig::new(), config);
    }

    #[test]
    fn test_builder_chain() {
        let config = ExpandConfig::new()
            .with_file_name("src/filter.c")
            .with_header_name("dialect.h")
            .with_line_markers(false);
        assert_eq!(config.file_name, "src/filter.c");
        assert_eq!(config.header_name, "dialect.h");
        assert!(!config.line_markers);
    }
}
