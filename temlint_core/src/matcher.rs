use crate::TemlintError;
use crate::TemlintResult;
use crate::tokens::TagToken;

/// One pending open tag. The frame carries everything needed to validate
/// its closer: the exact tag text for diagnostics, the derived name for
/// equality, and the opening location for the alignment rule.
#[derive(Debug, Clone)]
pub struct OpenFrame {
	pub token: TagToken,
}

/// Depth-counted stack of pending open tags.
///
/// Invariant: the nesting depth equals `frames.len()` at all times — one
/// push per recognized opener, one pop per processed closer.
#[derive(Debug)]
pub struct TagMatcher {
	frames: Vec<OpenFrame>,
	check_indent: bool,
}

impl TagMatcher {
	pub fn new(check_indent: bool) -> Self {
		Self {
			frames: Vec::new(),
			check_indent,
		}
	}

	/// Current nesting depth.
	pub fn depth(&self) -> usize {
		self.frames.len()
	}

	/// Record an opening tag.
	pub fn open(&mut self, token: TagToken) {
		self.frames.push(OpenFrame { token });
	}

	/// Validate a closing tag against the innermost open frame.
	pub fn close(&mut self, token: &TagToken) -> TemlintResult<()> {
		let Some(frame) = self.frames.pop() else {
			return Err(TemlintError::NoOpenTag {
				tag: token.text.clone(),
				line: token.point.line,
				column: token.point.column,
			});
		};

		let opener = &frame.token;
		if opener.name != token.name {
			return Err(TemlintError::MismatchedTag {
				opening_tag: opener.text.clone(),
				closing_tag: token.text.clone(),
				open_line: opener.point.line,
				open_column: opener.point.column,
				line: token.point.line,
				column: token.point.column,
			});
		}

		// Blocks spanning only two lines are tolerated regardless of
		// alignment; the column rule applies from three lines up.
		if self.check_indent
			&& token.point.line > opener.point.line + 1
			&& token.point.column != opener.point.column
		{
			return Err(TemlintError::BadIndentation {
				tag: opener.name.clone(),
				open_line: opener.point.line,
				open_column: opener.point.column,
				line: token.point.line,
				column: token.point.column,
			});
		}

		Ok(())
	}

	/// Report the innermost still-open tag once end of input is reached.
	pub fn finish(&self) -> TemlintResult<()> {
		match self.frames.last() {
			Some(frame) => Err(TemlintError::UnclosedTag {
				tag: frame.token.text.clone(),
				line: frame.token.point.line,
				column: frame.token.point.column,
			}),
			None => Ok(()),
		}
	}
}
