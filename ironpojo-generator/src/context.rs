//! Line-oriented output buffer for code generation.

/// Accumulates generated lines with prefix-based indentation.
///
/// Every written line is preceded by the configured prefix repeated once
/// per nesting level, plus once for the base level, so with a prefix of
/// `"  "` a top-level line is indented by two spaces and a line inside one
/// block by four. Blank lines carry no prefix.
#[derive(Debug)]
pub struct GenerationContext {
    prefix: String,
    depth: usize,
    buffer: String,
}

impl GenerationContext {
    /// Creates a context with the given line prefix at depth zero.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            depth: 0,
            buffer: String::new(),
        }
    }

    /// Writes one line at the current depth.
    pub fn write_line(&mut self, line: &str) {
        for _ in 0..=self.depth {
            self.buffer.push_str(&self.prefix);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Writes an empty line without any prefix.
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Increases the nesting depth by one.
    pub fn enter_block(&mut self) {
        self.depth += 1;
    }

    /// Decreases the nesting depth by one.
    pub fn exit_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consumes the context and returns the accumulated output.
    #[must_use]
    pub fn finish(self) -> String {
        self.buffer
    }
}
