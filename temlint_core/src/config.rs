use std::path::Path;

use serde::Deserialize;

use crate::TemlintError;
use crate::TemlintResult;

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default minimum number of files a full run must scan.
pub const DEFAULT_MIN_FILES: usize = 1;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["temlint.toml", ".temlint.toml", ".config/temlint.toml"];

/// Configuration loaded from a `temlint.toml` file.
///
/// ```toml
/// max_file_size = 10485760
/// min_files = 1
/// disable_gitignore = false
///
/// [exclude]
/// patterns = ["vendor/", "third_party/"]
///
/// [include]
/// patterns = ["email/**/*.source.html"]
///
/// [indentation]
/// exempt = ["legacy/**/*.html"]
/// ```
#[derive(Debug, Deserialize)]
pub struct TemlintConfig {
	/// Exclusion configuration using gitignore-style patterns. Files in an
	/// intentionally different markup dialect, or vendored third-party
	/// fixtures, belong here.
	#[serde(default)]
	pub exclude: ExcludeConfig,
	/// Inclusion configuration — additional glob patterns to scan beyond
	/// the default template extensions.
	#[serde(default)]
	pub include: IncludeConfig,
	/// Indentation configuration — paths whose closing tags are not held
	/// to the column-alignment rule.
	#[serde(default)]
	pub indentation: IndentationConfig,
	/// Maximum file size in bytes to scan. Larger files are skipped.
	/// Defaults to 10 MB.
	#[serde(default = "default_max_file_size")]
	pub max_file_size: u64,
	/// Minimum number of files a full (non-modified) run must scan. A run
	/// below this floor fails rather than quietly validating nothing.
	#[serde(default = "default_min_files")]
	pub min_files: usize,
	/// When true, `.gitignore` files are not used for filtering. By
	/// default (`false`), files that git would ignore are skipped. Set to
	/// `true` when working outside a git repository — in that case, use
	/// `[exclude]` patterns instead.
	#[serde(default)]
	pub disable_gitignore: bool,
}

/// Gitignore-style patterns removed from scanning.
#[derive(Debug, Default, Deserialize)]
pub struct ExcludeConfig {
	#[serde(default)]
	pub patterns: Vec<String>,
}

/// Extra glob patterns added to scanning.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeConfig {
	#[serde(default)]
	pub patterns: Vec<String>,
}

/// Paths where the indentation check is forced off.
#[derive(Debug, Default, Deserialize)]
pub struct IndentationConfig {
	#[serde(default)]
	pub exempt: Vec<String>,
}

fn default_max_file_size() -> u64 {
	DEFAULT_MAX_FILE_SIZE
}

fn default_min_files() -> usize {
	DEFAULT_MIN_FILES
}

impl TemlintConfig {
	/// Load configuration from the first config file candidate found under
	/// `root`. Returns `Ok(None)` when no config file exists.
	pub fn load(root: &Path) -> TemlintResult<Option<Self>> {
		for candidate in CONFIG_FILE_CANDIDATES {
			let path = root.join(candidate);
			if !path.is_file() {
				continue;
			}

			let content = std::fs::read_to_string(&path)?;
			let config =
				toml::from_str(&content).map_err(|e| TemlintError::ConfigParse(e.to_string()))?;
			return Ok(Some(config));
		}

		Ok(None)
	}
}
