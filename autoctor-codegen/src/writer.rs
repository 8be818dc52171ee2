//! Indentation-aware source text builder.

const DEFAULT_INDENT: &str = "    ";

/// Builds source text line by line, tracking block nesting.
///
/// Blocks are brace-delimited: [`open_block`](Self::open_block) writes the
/// header line and `{` and indents everything after it until the matching
/// [`close_block`](Self::close_block).
#[derive(Debug, Clone)]
pub struct SourceWriter {
    output: String,
    indent: String,
    depth: usize,
}

impl SourceWriter {
    /// Creates a writer indenting with four spaces.
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    /// Creates a writer with a custom indentation unit.
    #[must_use]
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            indent: indent.into(),
            depth: 0,
        }
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.output.push_str(&self.indent);
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
        self
    }

    /// Writes an empty line.
    pub fn blank_line(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Writes `header` followed by an opening brace and indents.
    pub fn open_block(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(header);
        self.line("{");
        self.depth += 1;
        self
    }

    /// Dedents and writes a closing brace. Does nothing at depth zero.
    pub fn close_block(&mut self) -> &mut Self {
        if self.depth > 0 {
            self.depth -= 1;
            self.line("}");
        }
        self
    }

    /// Closes every open block.
    pub fn close_all(&mut self) -> &mut Self {
        while self.depth > 0 {
            self.close_block();
        }
        self
    }

    /// Returns the number of open blocks.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consumes the writer and returns the text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new()
    }
}
