use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;
use tracing::debug;

use crate::TemlintError;
use crate::TemlintResult;
use crate::config::CONFIG_FILE_CANDIDATES;
use crate::config::DEFAULT_MAX_FILE_SIZE;
use crate::config::DEFAULT_MIN_FILES;
use crate::config::TemlintConfig;
use crate::validator::ValidateOptions;
use crate::validator::validate_content;

/// Options for controlling how a project is scanned.
///
/// Use [`ScanOptions::default()`] for sensible defaults or
/// [`ScanOptions::from_config`] to construct from a [`TemlintConfig`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
	/// Gitignore-style patterns to exclude from scanning.
	pub exclude_patterns: Vec<String>,
	/// Glob patterns adding files beyond the default template extensions.
	pub include_set: GlobSet,
	/// Glob patterns for files exempt from the indentation check.
	pub indent_exempt_set: GlobSet,
	/// Maximum file size to scan in bytes.
	pub max_file_size: u64,
	/// Minimum number of files a full run must scan.
	pub min_files: usize,
	/// Whether to disable `.gitignore` integration.
	pub disable_gitignore: bool,
	/// Whether the indentation check is enabled at all. Per-file
	/// exemptions come on top of this.
	pub check_indent: bool,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self {
			exclude_patterns: Vec::new(),
			include_set: GlobSet::empty(),
			indent_exempt_set: GlobSet::empty(),
			max_file_size: DEFAULT_MAX_FILE_SIZE,
			min_files: DEFAULT_MIN_FILES,
			disable_gitignore: false,
			check_indent: true,
		}
	}
}

impl ScanOptions {
	/// Construct [`ScanOptions`] from a [`TemlintConfig`].
	pub fn from_config(config: Option<&TemlintConfig>) -> Self {
		let exclude_patterns = config
			.map(|c| c.exclude.patterns.clone())
			.unwrap_or_default();
		let include_patterns = config.map(|c| &c.include.patterns[..]).unwrap_or_default();
		let exempt_patterns = config
			.map(|c| &c.indentation.exempt[..])
			.unwrap_or_default();
		let max_file_size = config.map_or(DEFAULT_MAX_FILE_SIZE, |c| c.max_file_size);
		let min_files = config.map_or(DEFAULT_MIN_FILES, |c| c.min_files);
		let disable_gitignore = config.is_some_and(|c| c.disable_gitignore);

		Self {
			exclude_patterns,
			include_set: build_glob_set(include_patterns),
			indent_exempt_set: build_glob_set(exempt_patterns),
			max_file_size,
			min_files,
			disable_gitignore,
			check_indent: true,
		}
	}
}

/// One failing file together with the first failure found in it.
#[derive(Debug)]
pub struct FileFailure {
	/// The file that failed validation.
	pub file: PathBuf,
	/// The structural failure, carrying tag text and locations.
	pub error: TemlintError,
}

/// The outcome of validating a set of files. The run as a whole succeeds
/// iff every scanned file succeeded.
#[derive(Debug, Default)]
pub struct ProjectReport {
	/// Every file that was scanned, in deterministic order.
	pub files: Vec<PathBuf>,
	/// Failures in scan order, at most one per file.
	pub failures: Vec<FileFailure>,
}

impl ProjectReport {
	pub fn is_ok(&self) -> bool {
		self.failures.is_empty()
	}
}

/// Build a `GlobSet` from a list of glob pattern strings.
fn build_glob_set(patterns: &[String]) -> GlobSet {
	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		if let Ok(glob) = Glob::new(pattern) {
			builder.add(glob);
		}
	}
	builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Normalize CRLF line endings to LF so column arithmetic is stable
/// across platforms.
pub fn normalize_line_endings(content: &str) -> String {
	if content.contains('\r') {
		content.replace("\r\n", "\n").replace('\r', "\n")
	} else {
		content.to_string()
	}
}

/// Build a `Gitignore` matcher from exclude patterns specified in
/// `temlint.toml` `[exclude]`. These follow `.gitignore` syntax and are
/// applied on top of any `.gitignore` rules.
fn build_exclude_matcher(root: &Path, patterns: &[String]) -> TemlintResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(root);
	for pattern in patterns {
		builder.add_line(None, pattern).map_err(|e| {
			TemlintError::ConfigParse(format!("invalid exclude pattern `{pattern}`: {e}"))
		})?;
	}
	builder
		.build()
		.map_err(|e| TemlintError::ConfigParse(format!("failed to build exclude rules: {e}")))
}

/// Build a `Gitignore` matcher from the project's `.gitignore` file (if
/// any).
fn build_gitignore(root: &Path) -> Gitignore {
	let mut builder = GitignoreBuilder::new(root);
	let gitignore_path = root.join(".gitignore");
	if gitignore_path.exists() {
		let _ = builder.add(gitignore_path);
	}
	builder.build().unwrap_or_else(|_| Gitignore::empty())
}

/// Collect all template files from a directory tree.
///
/// When `disable_gitignore` is false (the default), files matched by the
/// project's `.gitignore` are skipped. Exclude patterns from `[exclude]`
/// follow gitignore syntax and are always applied on top. The result is
/// sorted for deterministic ordering.
pub fn collect_files(root: &Path, options: &ScanOptions) -> TemlintResult<Vec<PathBuf>> {
	let mut files = Vec::new();
	let mut visited_dirs = HashSet::new();

	let gitignore = if options.disable_gitignore {
		Gitignore::empty()
	} else {
		build_gitignore(root)
	};
	let custom_exclude = build_exclude_matcher(root, &options.exclude_patterns)?;

	walk_dir(
		root,
		root,
		&mut files,
		true,
		&gitignore,
		&custom_exclude,
		options,
		&mut visited_dirs,
	)?;
	files.sort();
	Ok(files)
}

fn is_ignored_directory_name(name: &str) -> bool {
	name.starts_with('.') || name == "node_modules" || name == "target"
}

fn has_project_config(dir: &Path) -> bool {
	CONFIG_FILE_CANDIDATES
		.iter()
		.any(|candidate| dir.join(candidate).is_file())
}

#[allow(clippy::too_many_arguments)]
fn walk_dir(
	root: &Path,
	dir: &Path,
	files: &mut Vec<PathBuf>,
	is_root: bool,
	gitignore: &Gitignore,
	custom_exclude: &Gitignore,
	options: &ScanOptions,
	visited_dirs: &mut HashSet<PathBuf>,
) -> TemlintResult<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	// Guard against symlink cycles by tracking canonical paths.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !visited_dirs.insert(canonical) {
		return Ok(());
	}

	let entries = std::fs::read_dir(dir)?;

	for entry in entries {
		let entry = entry?;
		let path = entry.path();

		// Skip hidden directories and common non-source directories.
		if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
			if is_ignored_directory_name(name) {
				continue;
			}
		}

		let is_dir = path.is_dir();

		if gitignore.matched(&path, is_dir).is_ignore() {
			continue;
		}
		if custom_exclude.matched(&path, is_dir).is_ignore() {
			continue;
		}

		if is_dir {
			// Subdirectories with their own temlint config are a separate
			// project scope.
			if !is_root && has_project_config(&path) {
				continue;
			}
			walk_dir(
				root,
				&path,
				files,
				false,
				gitignore,
				custom_exclude,
				options,
				visited_dirs,
			)?;
		} else if is_candidate_file(root, &path, options) {
			match std::fs::metadata(&path) {
				Ok(metadata) if metadata.len() > options.max_file_size => {
					debug!(file = %path.display(), size = metadata.len(), "skipping oversized file");
				}
				_ => files.push(path),
			}
		}
	}

	Ok(())
}

/// Check if a file should be scanned: either it carries one of the
/// default template extensions, or it matches an `[include]` glob.
fn is_candidate_file(root: &Path, path: &Path, options: &ScanOptions) -> bool {
	if is_template_file(path) {
		return true;
	}
	let rel = path.strip_prefix(root).unwrap_or(path);
	options.include_set.is_match(rel)
}

/// Check if a file carries one of the default template extensions.
pub fn is_template_file(path: &Path) -> bool {
	let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
		return false;
	};

	matches!(ext, "html" | "htm" | "hbs" | "handlebars" | "mustache")
}

/// List template files that git reports as modified or untracked,
/// filtered through the same candidate and exclusion rules as a full
/// scan.
pub fn modified_files(root: &Path, options: &ScanOptions) -> TemlintResult<Vec<PathBuf>> {
	let output = Command::new("git")
		.arg("ls-files")
		.arg("--modified")
		.arg("--others")
		.arg("--exclude-standard")
		.current_dir(root)
		.output()
		.map_err(|e| TemlintError::GitDiscovery(e.to_string()))?;

	if !output.status.success() {
		let stderr = String::from_utf8_lossy(&output.stderr);
		return Err(TemlintError::GitDiscovery(stderr.trim().to_string()));
	}

	let custom_exclude = build_exclude_matcher(root, &options.exclude_patterns)?;
	let stdout = String::from_utf8_lossy(&output.stdout);
	let mut files: Vec<PathBuf> = stdout
		.lines()
		.map(|line| root.join(line))
		.filter(|path| path.is_file())
		.filter(|path| is_candidate_file(root, path, options))
		.filter(|path| !custom_exclude.matched(path, false).is_ignore())
		.collect();
	files.sort();
	Ok(files)
}

/// Whether the indentation check applies to one file. The core validator
/// only ever sees the resulting boolean.
pub fn indent_check_enabled(root: &Path, file: &Path, options: &ScanOptions) -> bool {
	if !options.check_indent {
		return false;
	}
	let rel = file.strip_prefix(root).unwrap_or(file);
	!options.indent_exempt_set.is_match(rel)
}

/// Validate a set of files, collecting at most one failure per file.
/// One file's failure never stops the run.
pub fn validate_files(root: &Path, files: Vec<PathBuf>, options: &ScanOptions) -> ProjectReport {
	let mut report = ProjectReport {
		files: Vec::with_capacity(files.len()),
		failures: Vec::new(),
	};

	for file in files {
		let validate_options = ValidateOptions {
			check_indent: indent_check_enabled(root, &file, options),
		};
		debug!(file = %file.display(), check_indent = validate_options.check_indent, "validating");

		let result = std::fs::read_to_string(&file)
			.map_err(TemlintError::from)
			.and_then(|raw| validate_content(&normalize_line_endings(&raw), &validate_options));

		if let Err(error) = result {
			report.failures.push(FileFailure {
				file: file.clone(),
				error,
			});
		}
		report.files.push(file);
	}

	report
}

/// Discover and validate every template file under `root`.
pub fn validate_project(root: &Path, options: &ScanOptions) -> TemlintResult<ProjectReport> {
	let files = collect_files(root, options)?;
	Ok(validate_files(root, files, options))
}
