use crate::tokens::TagKind;

/// HTML elements that never take a closing tag. The doctype declaration is
/// grouped here because it shares the angle-bracket syntax without opening
/// a block.
const VOID_ELEMENTS: &[&str] = &[
	"!DOCTYPE", "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
	"param", "source", "track", "wbr",
];

/// Directive names that open a block and require a matching `{% end... %}`.
/// Anything else sharing the `{% ... %}` delimiters (variable output,
/// `else`, `include`, ...) stands alone.
const DIRECTIVE_BLOCK_TAGS: &[&str] = &[
	"autoescape",
	"block",
	"blocktrans",
	"comment",
	"for",
	"if",
	"ifequal",
	"verbatim",
	"with",
];

pub(crate) fn is_void_element(name: &str) -> bool {
	VOID_ELEMENTS.contains(&name)
}

pub(crate) fn is_directive_block_tag(name: &str) -> bool {
	DIRECTIVE_BLOCK_TAGS.contains(&name)
}

/// Extract the name of an HTML-style tag: the first whitespace-delimited
/// token between the angle brackets, after the `/` for closing tags.
pub(crate) fn html_tag_name(text: &str) -> &str {
	let inner = text.trim_start_matches('<').trim_start_matches('/');
	let inner = inner.trim_end_matches('>').trim_end_matches('/');
	inner.split_whitespace().next().unwrap_or("")
}

/// Classify one HTML-style tag into open/close/ignorable plus its name.
pub(crate) fn classify_html(text: &str) -> (TagKind, String) {
	let name = html_tag_name(text).to_string();
	if text.starts_with("</") {
		return (TagKind::Close, name);
	}
	if text.ends_with("/>") || is_void_element(&name) {
		return (TagKind::Ignored, name);
	}
	(TagKind::Open, name)
}

/// Classify one mustache tag. Only called for text produced by the
/// mustache extractor, so the text is known to start with `{{#`, `{{^`,
/// or `{{/` and end with `}}`.
pub(crate) fn classify_mustache(text: &str) -> (TagKind, String) {
	let inner = &text[3..text.len() - 2];
	if text.starts_with("{{/") {
		// A closer's name is everything between the marker and the `}}`,
		// verbatim.
		return (TagKind::Close, inner.to_string());
	}
	let name = inner.split_whitespace().next().unwrap_or("").to_string();
	(TagKind::Open, name)
}

/// Classify one directive tag. Only called for text produced by the
/// directive extractor, so the text is known to start with `{% ` and end
/// with `%}`.
pub(crate) fn classify_directive(text: &str) -> (TagKind, String) {
	let inner = text[2..text.len() - 2].trim();
	if let Some(rest) = inner.strip_prefix("end") {
		let name = rest.split_whitespace().next().unwrap_or(rest).to_string();
		return (TagKind::Close, name);
	}
	let name = inner.split_whitespace().next().unwrap_or("");
	if is_directive_block_tag(name) {
		(TagKind::Open, name.to_string())
	} else {
		(TagKind::Ignored, name.to_string())
	}
}
