use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TemlintError {
	#[error(transparent)]
	#[diagnostic(code(temlint::io_error))]
	Io(#[from] std::io::Error),

	#[error("tag `{tag}` at {line}:{column} is missing its closing `{delimiter}`")]
	#[diagnostic(
		code(temlint::unterminated_tag),
		help("the construct never terminates before end of file; add the `{delimiter}` delimiter")
	)]
	UnterminatedTag {
		tag: String,
		delimiter: &'static str,
		line: usize,
		column: usize,
	},

	#[error("closing tag `{tag}` at {line}:{column} has no matching opening tag")]
	#[diagnostic(code(temlint::no_open_tag))]
	NoOpenTag {
		tag: String,
		line: usize,
		column: usize,
	},

	#[error(
		"closing tag `{closing_tag}` at {line}:{column} does not match opening tag \
		 `{opening_tag}` at {open_line}:{open_column}"
	)]
	#[diagnostic(code(temlint::mismatched_tag))]
	MismatchedTag {
		opening_tag: String,
		closing_tag: String,
		open_line: usize,
		open_column: usize,
		line: usize,
		column: usize,
	},

	#[error(
		"closing tag for `{tag}` at {line}:{column} is not aligned with its opening tag at \
		 {open_line}:{open_column}"
	)]
	#[diagnostic(
		code(temlint::bad_indentation),
		help(
			"indent the closing tag to column {open_column}, or exempt this file under \
			 `[indentation]` in temlint.toml"
		)
	)]
	BadIndentation {
		tag: String,
		open_line: usize,
		open_column: usize,
		line: usize,
		column: usize,
	},

	#[error("tag `{tag}` opened at {line}:{column} is never closed")]
	#[diagnostic(code(temlint::unclosed_tag))]
	UnclosedTag {
		tag: String,
		line: usize,
		column: usize,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(temlint::config_parse),
		help(
			"check that temlint.toml is valid TOML with [exclude], [include], and [indentation] \
			 sections"
		)
	)]
	ConfigParse(String),

	#[error("failed to list modified files: {0}")]
	#[diagnostic(
		code(temlint::git_discovery),
		help("--modified requires a git checkout; run without it to scan every file")
	)]
	GitDiscovery(String),

	#[error("only {scanned} file(s) scanned, expected at least {minimum}")]
	#[diagnostic(
		code(temlint::too_few_files),
		help(
			"a full run that scans almost nothing usually means discovery is misconfigured; check \
			 the project root and any [exclude] patterns"
		)
	)]
	TooFewFiles { scanned: usize, minimum: usize },
}

impl TemlintError {
	/// The (line, column) of the closing-side or sole offending tag.
	pub fn location(&self) -> Option<(usize, usize)> {
		match self {
			Self::UnterminatedTag { line, column, .. }
			| Self::NoOpenTag { line, column, .. }
			| Self::MismatchedTag { line, column, .. }
			| Self::BadIndentation { line, column, .. }
			| Self::UnclosedTag { line, column, .. } => Some((*line, *column)),
			_ => None,
		}
	}

	/// The (line, column) of the opening tag, for failures that have both
	/// sides.
	pub fn open_location(&self) -> Option<(usize, usize)> {
		match self {
			Self::MismatchedTag {
				open_line,
				open_column,
				..
			}
			| Self::BadIndentation {
				open_line,
				open_column,
				..
			} => Some((*open_line, *open_column)),
			_ => None,
		}
	}

	/// Stable category name used by structured output.
	pub fn category(&self) -> &'static str {
		match self {
			Self::Io(_) => "io",
			Self::UnterminatedTag { .. } => "unterminated_tag",
			Self::NoOpenTag { .. } => "no_open_tag",
			Self::MismatchedTag { .. } => "mismatched_tag",
			Self::BadIndentation { .. } => "bad_indentation",
			Self::UnclosedTag { .. } => "unclosed_tag",
			Self::ConfigParse(_) => "config_parse",
			Self::GitDiscovery(_) => "git_discovery",
			Self::TooFewFiles { .. } => "too_few_files",
		}
	}
}

pub type TemlintResult<T> = Result<T, TemlintError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
