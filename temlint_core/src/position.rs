use std::fmt;

/// A cursor location within one source file.
///
/// Lines and columns are 1-based. `column` counts characters so that
/// diagnostics stay meaningful for multi-byte text, while `offset` counts
/// bytes and is what the scanner uses to slice the source.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Point {
	pub line: usize,
	pub column: usize,
	pub offset: usize,
}

impl Point {
	pub fn new(line: usize, column: usize, offset: usize) -> Self {
		Self {
			line,
			column,
			offset,
		}
	}

	/// Advance the cursor through one consumed character. A newline
	/// increments the line and resets the column to 1; anything else
	/// increments the column.
	pub fn advance_char(&mut self, ch: char) {
		self.offset += ch.len_utf8();
		if ch == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
	}

	/// Advance the cursor through a consumed slice of text.
	pub fn advance_str(&mut self, text: &str) {
		for ch in text.chars() {
			self.advance_char(ch);
		}
	}
}

impl Default for Point {
	fn default() -> Self {
		Self::new(1, 1, 0)
	}
}

impl fmt::Debug for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{} ({})", self.line, self.column, self.offset)
	}
}
