use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use miette::Diagnostic;
use owo_colors::OwoColorize;
use temlint_cli::Commands;
use temlint_cli::OutputFormat;
use temlint_cli::TemlintCli;
use temlint_core::AnyEmptyResult;
use temlint_core::FileFailure;
use temlint_core::ProjectReport;
use temlint_core::ScanOptions;
use temlint_core::TemlintConfig;
use temlint_core::TemlintError;
use temlint_core::collect_files;
use temlint_core::indent_check_enabled;
use temlint_core::modified_files;
use temlint_core::validate_files;
use temlint_core::validate_project;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = TemlintCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	if args.verbose {
		let filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("temlint_core=debug"));
		let _ = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.try_init();
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Check {
			modified,
			min_files,
			format,
		}) => run_check(&args, modified, min_files, format),
		Some(Commands::List) => run_list(&args),
		None => {
			eprintln!("No subcommand specified. Run `temlint --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Render through miette for rich diagnostics with help text and
		// error codes where possible.
		match e.downcast::<TemlintError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn resolve_root(args: &TemlintCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_options(args: &TemlintCli, root: &Path) -> Result<ScanOptions, TemlintError> {
	let config = TemlintConfig::load(root)?;
	let mut options = ScanOptions::from_config(config.as_ref());
	if args.ignore_indentation {
		options.check_indent = false;
	}
	Ok(options)
}

fn run_init(args: &TemlintCli) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config_path = root.join("temlint.toml");

	if config_path.exists() {
		println!("Config file already exists: {}", config_path.display());
		return Ok(());
	}

	let sample_config = "# temlint configuration\n\n# Gitignore-style patterns for files that \
	                     should never be checked, e.g. vendored\n# fixtures or files in a \
	                     different markup dialect.\n# [exclude]\n# patterns = [\"vendor/\", \
	                     \"third_party/\"]\n\n# Extra globs to scan beyond the default template \
	                     extensions\n# (html, htm, hbs, handlebars, mustache).\n# [include]\n# \
	                     patterns = [\"email/**/*.source.html\"]\n\n# Files whose closing tags \
	                     are not held to the column-alignment rule.\n# [indentation]\n# exempt = \
	                     [\"legacy/**/*.html\"]\n\n# Minimum number of files a full run must \
	                     scan.\n# min_files = 1\n\n# Set to true when working outside a git \
	                     checkout.\n# disable_gitignore = false\n";

	std::fs::write(&config_path, sample_config)?;
	println!("Created temlint.toml");
	println!();
	println!("Next steps:");
	println!("  1. Uncomment and adjust the sections you need");
	println!("  2. Run `temlint list` to see which files will be checked");
	println!("  3. Run `temlint check` to validate them");

	Ok(())
}

fn run_check(
	args: &TemlintCli,
	modified: bool,
	min_files: Option<usize>,
	format: OutputFormat,
) -> AnyEmptyResult {
	let root = resolve_root(args);
	let options = load_options(args, &root)?;

	let report = if modified {
		let files = modified_files(&root, &options)?;
		validate_files(&root, files, &options)
	} else {
		let report = validate_project(&root, &options)?;
		let minimum = min_files.unwrap_or(options.min_files);
		if report.files.len() < minimum {
			return Err(Box::new(TemlintError::TooFewFiles {
				scanned: report.files.len(),
				minimum,
			}));
		}
		report
	};

	if args.verbose {
		println!("Scanned {} file(s)", report.files.len());
	}

	if report.is_ok() {
		match format {
			OutputFormat::Json => println!("{{\"ok\":true,\"failures\":[]}}"),
			OutputFormat::Github => println!("All template files are well-formed."),
			OutputFormat::Text => println!("Check passed: all template files are well-formed."),
		}
		return Ok(());
	}

	match format {
		OutputFormat::Json => {
			let failures: Vec<serde_json::Value> = report
				.failures
				.iter()
				.map(|failure| {
					let rel = make_relative(&failure.file, &root);
					let (line, column) = failure.error.location().unwrap_or((0, 0));
					let mut entry = serde_json::json!({
						"file": rel,
						"category": failure.error.category(),
						"message": failure.error.to_string(),
						"line": line,
						"column": column,
					});
					if let Some((open_line, open_column)) = failure.error.open_location() {
						entry["open_line"] = open_line.into();
						entry["open_column"] = open_column.into();
					}
					entry
				})
				.collect();
			let output = serde_json::json!({
				"ok": false,
				"failures": failures,
			});
			println!("{output}");
		}
		OutputFormat::Github => {
			for failure in &report.failures {
				let rel = make_relative(&failure.file, &root);
				let (line, column) = failure.error.location().unwrap_or((1, 1));
				println!(
					"::error file={rel},line={line},col={column}::{}",
					failure.error
				);
			}
			eprintln!("{}", check_summary(&report));
		}
		OutputFormat::Text => {
			for failure in &report.failures {
				let rel = make_relative(&failure.file, &root);
				let rendered = failure_to_report(failure, &rel);
				eprintln!("{rendered:?}");
			}
			eprintln!("{}", check_summary(&report));
		}
	}

	process::exit(1);
}

fn run_list(args: &TemlintCli) -> AnyEmptyResult {
	let root = resolve_root(args);
	let options = load_options(args, &root)?;
	let files = collect_files(&root, &options)?;

	if files.is_empty() {
		println!("No template files found.");
		return Ok(());
	}

	println!("{}", colored!("Template files:", bold));
	for file in &files {
		let rel = make_relative(file, &root);
		let indent = if indent_check_enabled(&root, file, &options) {
			"indent"
		} else {
			"no-indent"
		};
		println!("  {rel} [{indent}]");
	}
	println!();
	println!("{} file(s)", files.len());

	Ok(())
}

fn check_summary(report: &ProjectReport) -> String {
	format!(
		"{} of {} file(s) failed validation.",
		report.failures.len(),
		report.files.len()
	)
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}

/// Convert a [`FileFailure`] into a `miette::Report` carrying the file
/// location prefix, error code, and help text for rich terminal display.
fn failure_to_report(failure: &FileFailure, rel_path: &str) -> miette::Report {
	let location = failure
		.error
		.location()
		.map_or_else(String::new, |(line, column)| format!(":{line}:{column}"));
	let message = format!("[{rel_path}{location}] {}", failure.error);

	let mut diag = miette::MietteDiagnostic::new(message).with_severity(miette::Severity::Error);
	if let Some(code) = failure.error.code() {
		diag = diag.with_code(code.to_string());
	}
	if let Some(help) = failure.error.help() {
		diag = diag.with_help(help.to_string());
	}
	miette::Report::new(diag)
}
