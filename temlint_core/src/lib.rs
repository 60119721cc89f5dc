//! `temlint_core` is the core library for the `temlint` structural
//! template linter. It validates files that mix three nested tagging
//! syntaxes — HTML-style elements, mustache-style block sections, and
//! server-template directives — checking that every block tag is closed
//! by a matching tag before a mismatch turns into a silent rendering bug.
//!
//! ## Processing pipeline
//!
//! ```text
//! Template file
//!   → Scanner (single pass, recognizes tag boundaries in all three syntaxes)
//!   → Classifier (opener / closer / ignorable)
//!   → Matcher (stack of open frames, name + indentation validation)
//!   → Project report (per-file pass/fail with tag text and locations)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `temlint.toml`, including
//!   exclude/include patterns and indentation exemptions.
//! - [`project`] — File discovery and whole-project validation.
//!
//! ## Key types
//!
//! - [`TagToken`] — one recognized construct with its exact text, derived
//!   name, and source location.
//! - [`TagMatcher`] — the nesting stack enforcing open/close discipline.
//! - [`TemlintConfig`] — configuration loaded from `temlint.toml`.
//! - [`ProjectReport`] — the outcome of validating a file set.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use temlint_core::ScanOptions;
//! use temlint_core::TemlintConfig;
//! use temlint_core::validate_project;
//!
//! # fn main() -> temlint_core::TemlintResult<()> {
//! let root = Path::new(".");
//! let config = TemlintConfig::load(root)?;
//! let options = ScanOptions::from_config(config.as_ref());
//!
//! let report = validate_project(root, &options)?;
//! for failure in &report.failures {
//! 	eprintln!("{}: {}", failure.file.display(), failure.error);
//! }
//! # Ok(())
//! # }
//! ```

pub use config::*;
pub use error::*;
pub use matcher::*;
pub use position::*;
pub use project::*;
pub use tokens::*;
pub use validator::*;

pub(crate) mod classify;
pub mod config;
mod error;
pub(crate) mod lexer;
mod matcher;
mod position;
pub mod project;
mod tokens;
mod validator;
