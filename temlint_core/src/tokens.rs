use std::fmt::Display;

use crate::Point;

/// The syntax family a recognized construct belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
	/// `<div>` | `</div>` | `<br/>` | `<!DOCTYPE html>`
	Html,
	/// `<!-- ... -->`
	Comment,
	/// `{{#name ...}}` | `{{^name ...}}` | `{{/name}}`
	Mustache,
	/// `{% name ... %}` | `{% endname %}`
	Directive,
}

/// How a construct participates in nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
	/// Opens a block that requires a matching closer.
	Open,
	/// Closes the innermost open block.
	Close,
	/// Never pushes or pops a frame: comments, void and self-closing
	/// elements, and non-block directives.
	Ignored,
}

/// One complete tag occurrence: the exact source substring, the name used
/// for open/close matching, and the location of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
	/// The exact source text of the tag, delimiters included.
	pub text: String,
	/// The identifier used for open/close matching. Empty for comments.
	pub name: String,
	/// Whether this tag opens a block, closes one, or stands alone.
	pub kind: TagKind,
	/// Which of the tagging syntaxes produced this tag.
	pub syntax: Syntax,
	/// Location of the tag's first character.
	pub point: Point,
}

impl Display for TagToken {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.text)
	}
}
