//! Display and input buffers for a terminal session.

/// Marker printed at the start of every command line.
pub const PROMPT: &str = "> ";

/// Lines shown on the terminal screen.
///
/// The buffer only ever grows, except for two in-place edits: replacing the
/// last line when a command is committed, and `clear`, which resets it to a
/// single prompt line. It is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    lines: Vec<String>,
}

impl DisplayBuffer {
    /// A buffer holding one blank line, ready for the boot script.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// A buffer holding a single prompt line.
    pub fn with_prompt() -> Self {
        Self {
            lines: vec![PROMPT.to_string()],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a blank line and return its index.
    pub fn push_blank(&mut self) -> usize {
        self.lines.push(String::new());
        self.lines.len() - 1
    }

    /// Append a fresh prompt line.
    pub fn push_prompt(&mut self) {
        self.lines.push(PROMPT.to_string());
    }

    /// Append a character to the given line, growing the buffer if needed.
    pub fn push_char(&mut self, line: usize, ch: char) {
        while self.lines.len() <= line {
            self.lines.push(String::new());
        }
        self.lines[line].push(ch);
    }

    /// Replace the last line in place.
    pub fn replace_last(&mut self, text: String) {
        match self.lines.last_mut() {
            Some(last) => *last = text,
            None => self.lines.push(text),
        }
    }

    /// Drop everything and leave a single prompt line.
    pub fn clear_to_prompt(&mut self) {
        self.lines.clear();
        self.lines.push(PROMPT.to_string());
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// The command currently being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Remove the last character. No-op on an empty buffer.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Take the typed text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
