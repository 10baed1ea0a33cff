//! Output writer with line-marker tracking
//!
//! Generated text is appended in document order. The writer remembers whether it sits at the start of a line so
//! that a `#line` marker always occupies a line of its own.

use flatco_core::lang::conventions;

use super::config::ExpandConfig;

/// Writer that builds the expanded output
pub struct OutputWriter {
    /// The output buffer
    output: String,
    /// Pre-quoted file identifier for line markers
    quoted_file: String,
    /// Whether line markers are emitted
    line_markers: bool,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl OutputWriter {
    /// Create a new writer for the given config
    pub fn new(config: &ExpandConfig) -> Self {
        Self {
            output: String::new(),
            quoted_file: conventions::quote_file_name(&config.file_name),
            line_markers: config.line_markers,
            at_line_start: true,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Write text verbatim
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.output.push_str(s);
        self.at_line_start = s.ends_with('\n');
    }

    /// Re-anchor the following text to `row` of the input file
    pub fn line_marker(&mut self, row: usize) {
        if !self.line_markers {
            return;
        }
        if !self.at_line_start {
            self.output.push('\n');
        }
        self.output.push_str(conventions::LINE_DIRECTIVE);
        self.output.push_str(&format!(" {row} {}\n", self.quoted_file));
        self.at_line_start = true;
    }

    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }
}
