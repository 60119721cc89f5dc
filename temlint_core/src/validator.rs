use tracing::debug;

use crate::TemlintResult;
use crate::lexer::Scanner;
use crate::matcher::TagMatcher;
use crate::tokens::TagKind;

/// Per-file validation options. The indentation check defaults to on; the
/// orchestrator turns it off for exempted paths.
#[derive(Debug, Clone, Copy)]
pub struct ValidateOptions {
	/// Whether closing tags of blocks spanning three or more lines must
	/// sit in the same column as their opener.
	pub check_indent: bool,
}

impl Default for ValidateOptions {
	fn default() -> Self {
		Self { check_indent: true }
	}
}

/// Validate one file's contents, returning the first structural failure
/// in document order.
///
/// The scan is a single left-to-right pass: each recognized opener pushes
/// a frame, each closer pops and validates one, and everything else is
/// skipped. Reaching end of input with open frames is itself a failure.
pub fn validate_content(content: &str, options: &ValidateOptions) -> TemlintResult<()> {
	let mut scanner = Scanner::new(content);
	let mut matcher = TagMatcher::new(options.check_indent);

	while let Some(token) = scanner.next_tag()? {
		match token.kind {
			TagKind::Open => matcher.open(token),
			TagKind::Close => matcher.close(&token)?,
			TagKind::Ignored => {}
		}
	}

	debug!(depth = matcher.depth(), "scan complete");
	matcher.finish()
}
