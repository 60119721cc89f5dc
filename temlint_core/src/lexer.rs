use tracing::trace;

use crate::TemlintError;
use crate::TemlintResult;
use crate::classify::classify_directive;
use crate::classify::classify_html;
use crate::classify::classify_mustache;
use crate::position::Point;
use crate::tokens::Syntax;
use crate::tokens::TagKind;
use crate::tokens::TagToken;

/// Single-pass cursor over one file's contents. Yields one classified
/// [`TagToken`] per recognized construct, consuming plain text between
/// constructs one character at a time.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
	text: &'a str,
	point: Point,
}

impl<'a> Scanner<'a> {
	pub(crate) fn new(text: &'a str) -> Self {
		Self {
			text,
			point: Point::default(),
		}
	}

	fn rest(&self) -> &'a str {
		&self.text[self.point.offset..]
	}

	/// Advance to and return the next tag-like construct, or `None` at end
	/// of input. Marker tests run in a fixed order: HTML comment, HTML
	/// tag, mustache tag, directive tag.
	pub(crate) fn next_tag(&mut self) -> TemlintResult<Option<TagToken>> {
		loop {
			let rest = self.rest();
			let Some(first) = rest.chars().next() else {
				return Ok(None);
			};

			if rest.starts_with("<!--") {
				return self.comment_token().map(Some);
			}
			if first == '<' {
				return self.html_token().map(Some);
			}
			if rest.starts_with("{{#") || rest.starts_with("{{^") || rest.starts_with("{{/") {
				return self.mustache_token().map(Some);
			}
			if rest.starts_with("{% ") {
				return self.directive_token().map(Some);
			}

			self.point.advance_char(first);
		}
	}

	fn comment_token(&mut self) -> TemlintResult<TagToken> {
		let point = self.point;
		let text = extract_html_comment(self.text, point)?;
		Ok(self.emit(text, TagKind::Ignored, String::new(), Syntax::Comment, point))
	}

	fn html_token(&mut self) -> TemlintResult<TagToken> {
		let point = self.point;
		let text = extract_html_tag(self.text, point)?;
		let (kind, name) = classify_html(text);
		Ok(self.emit(text, kind, name, Syntax::Html, point))
	}

	fn mustache_token(&mut self) -> TemlintResult<TagToken> {
		let point = self.point;
		let text = extract_mustache_tag(self.text, point)?;
		let (kind, name) = classify_mustache(text);
		Ok(self.emit(text, kind, name, Syntax::Mustache, point))
	}

	fn directive_token(&mut self) -> TemlintResult<TagToken> {
		let point = self.point;
		let text = extract_directive_tag(self.text, point)?;
		let (kind, name) = classify_directive(text);
		Ok(self.emit(text, kind, name, Syntax::Directive, point))
	}

	fn emit(
		&mut self,
		text: &str,
		kind: TagKind,
		name: String,
		syntax: Syntax,
		point: Point,
	) -> TagToken {
		self.point.advance_str(text);
		trace!(
			tag = text,
			line = point.line,
			column = point.column,
			"recognized tag"
		);
		TagToken {
			text: text.to_string(),
			name,
			kind,
			syntax,
			point,
		}
	}
}

/// Extract an HTML-style tag from `<` to its matching `>`. A running count
/// of `"` characters is kept, and a `>` is only accepted as the terminator
/// while that count is even, so `>` inside a double-quoted attribute value
/// does not end the tag.
pub(crate) fn extract_html_tag(text: &str, start: Point) -> TemlintResult<&str> {
	let bytes = text.as_bytes();
	let mut quote_count = 0usize;
	let mut end = start.offset + 1;
	while end < bytes.len() {
		match bytes[end] {
			b'"' => quote_count += 1,
			b'>' if quote_count % 2 == 0 => return Ok(&text[start.offset..=end]),
			_ => {}
		}
		end += 1;
	}
	Err(unterminated(text, start, ">"))
}

/// Extract an HTML comment from `<!--` to `-->`, inclusive.
pub(crate) fn extract_html_comment(text: &str, start: Point) -> TemlintResult<&str> {
	let after = start.offset + 4;
	match text[after..].find("-->") {
		Some(at) => Ok(&text[start.offset..after + at + 3]),
		None => Err(unterminated(text, start, "-->")),
	}
}

/// Extract a mustache tag from its 3-character marker to `}}`. The scan
/// stops at the first `}` and requires the character after it to also be
/// `}`.
pub(crate) fn extract_mustache_tag(text: &str, start: Point) -> TemlintResult<&str> {
	let bytes = text.as_bytes();
	let mut end = start.offset + 3;
	while end < bytes.len() {
		if bytes[end] == b'}' {
			if bytes.get(end + 1) == Some(&b'}') {
				return Ok(&text[start.offset..end + 2]);
			}
			break;
		}
		end += 1;
	}
	Err(unterminated(text, start, "}}"))
}

/// Extract a directive tag from its 3-character marker to `%}`. The scan
/// stops at the first `%` and requires the character after it to be `}`.
pub(crate) fn extract_directive_tag(text: &str, start: Point) -> TemlintResult<&str> {
	let bytes = text.as_bytes();
	let mut end = start.offset + 3;
	while end < bytes.len() {
		if bytes[end] == b'%' {
			if bytes.get(end + 1) == Some(&b'}') {
				return Ok(&text[start.offset..end + 2]);
			}
			break;
		}
		end += 1;
	}
	Err(unterminated(text, start, "%}"))
}

/// Build an `UnterminatedTag` error with a short single-line snippet of
/// the offending construct.
fn unterminated(text: &str, start: Point, delimiter: &'static str) -> TemlintError {
	let rest = &text[start.offset..];
	let mut snippet: String = rest.chars().take(32).collect();
	if let Some(newline) = snippet.find('\n') {
		snippet.truncate(newline);
	}
	TemlintError::UnterminatedTag {
		tag: snippet,
		delimiter,
		line: start.line,
		column: start.column,
	}
}
