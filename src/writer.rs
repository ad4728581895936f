use crate::error::{RenderError, RenderResult};

/// Append-only text sink that indents every line it starts.
///
/// Indentation is applied lazily: the prefix for the current depth is written
/// when the first non-empty text lands on a fresh line, so changing depth
/// between a newline and the next write affects that next line.
#[derive(Debug, Clone)]
pub struct IndentingWriter {
    buffer: String,
    indent_unit: String,
    depth: usize,
    at_line_start: bool,
}

impl Default for IndentingWriter {
    fn default() -> Self {
        Self::with_indent("    ")
    }
}

impl IndentingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(indent_unit: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            indent_unit: indent_unit.into(),
            depth: 0,
            at_line_start: true,
        }
    }

    /// Append `text` at the cursor. Embedded newlines start new lines, each
    /// indented to the current depth.
    pub fn write(&mut self, text: &str) {
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.buffer.push('\n');
                self.at_line_start = true;
            }
            if segment.is_empty() {
                continue;
            }
            if self.at_line_start {
                for _ in 0..self.depth {
                    self.buffer.push_str(&self.indent_unit);
                }
                self.at_line_start = false;
            }
            self.buffer.push_str(segment);
        }
    }

    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.buffer.push('\n');
        self.at_line_start = true;
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn unindent(&mut self) -> RenderResult<()> {
        if self.depth == 0 {
            return Err(RenderError::IndentUnderflow);
        }
        self.depth -= 1;
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}
