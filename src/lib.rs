//! Kwsub - CLI tool for rewriting `kw("...")` keyword calls into generated
//! identifier tokens.
//!
//! This library provides the core functionality for kwsub, including:
//! - Identifier synthesis from keyword literals
//! - Line-level matching and rewriting of the call pattern
//! - The file-to-file rewrite pass
//!
//! # Example
//!
//! ```no_run
//! use kwsub_cli::pass::rewrite_file;
//! use std::path::Path;
//!
//! let summary = rewrite_file(Path::new("eval.go")).unwrap();
//! println!(
//!     "{} replacements -> {}",
//!     summary.replacements,
//!     summary.output_path.display()
//! );
//! ```

pub mod error;
pub mod pass;
pub mod rewrite;

pub use error::{KwsubError, Result};
