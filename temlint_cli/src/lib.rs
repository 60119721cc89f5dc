use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Validate block-tag nesting in mixed-syntax template files.",
	long_about = "temlint checks template source files that mix HTML elements, \
	              mustache-style sections, and server-template directives in the same \
	              file. It verifies that every block tag is closed by a matching tag \
	              and, where enabled, that closing tags line up with their \
	              openers.\n\nQuick start:\n  temlint init   Create a sample config \
	              file\n  temlint check  Validate every template file\n  temlint list   \
	              Show which files would be checked"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct TemlintCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,

	/// Skip the indentation check for every file, not just the paths
	/// exempted in temlint.toml.
	#[arg(long, global = true, default_value_t = false)]
	pub ignore_indentation: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Initialize temlint in a project by creating a sample config file.
	///
	/// Creates a `temlint.toml` in the project root with commented-out
	/// sections for excludes, extra includes, and indentation exemptions.
	/// If the file already exists, this command is a no-op and exits
	/// successfully.
	Init,
	/// Validate block-tag nesting in every discovered template file.
	///
	/// Scans the project for template files and checks each one for
	/// mismatched, unclosed, unterminated, or misaligned block tags.
	/// Exits with a non-zero status code if any file fails.
	///
	/// Ideal for CI pipelines and pre-commit hooks. Use `--modified` to
	/// restrict the run to files git reports as changed, and `--format`
	/// to control the output style.
	Check {
		/// Only check files that git reports as modified or untracked.
		/// Skips the minimum-file sanity check.
		#[arg(long, short, default_value_t = false)]
		modified: bool,

		/// Minimum number of files a full run must scan. Guards against a
		/// discovery misconfiguration silently validating nothing.
		/// Overrides `min_files` from temlint.toml.
		#[arg(long)]
		min_files: Option<usize>,

		/// Output format for check results. Use `text` for human-readable
		/// output, `json` for programmatic consumption, or `github` for
		/// GitHub Actions annotations that appear inline on PRs.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// List the template files a full check run would scan.
	///
	/// Shows every discovered file along with whether the indentation
	/// check applies to it, followed by a summary count. Useful for
	/// verifying exclude and include patterns before wiring temlint into
	/// CI.
	List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption. Each failure includes
	/// the file path, failure category, message, and location.
	Json,
	/// GitHub Actions annotation format. Emits `::error` annotations
	/// that appear inline on pull request diffs.
	Github,
}
