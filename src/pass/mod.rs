//! The file-to-file rewrite pass.
//!
//! This module handles:
//! - Deriving the output path from the input path
//! - Streaming the input through the rewriter, one line at a time
//! - Reporting what the pass did

use crate::error::{KwsubError, Result};
use crate::rewrite::KwPattern;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Outcome of a completed rewrite pass.
#[derive(Debug)]
pub struct RewriteSummary {
	/// Path the rewritten copy was written to.
	pub output_path: PathBuf,

	/// Number of lines processed.
	pub lines: usize,

	/// Number of keyword calls replaced.
	pub replacements: usize,
}

/// Derive the output path from the input path: strip the file name's
/// extension (text after its final `.`), then append `_replaced.go`.
///
/// Only the final path component is affected, so dotted directory names and
/// extensionless file names pass through whole. The output extension is
/// always `.go`, whatever the input's extension was.
pub fn derive_output_path(input: &Path) -> PathBuf {
	let mut stem = input.with_extension("").into_os_string();
	stem.push("_replaced.go");
	PathBuf::from(stem)
}

/// Run the rewrite pass over `input`, writing the rewritten copy to the
/// derived output path.
///
/// The input is opened before the output is created, so a missing input
/// never leaves an output file behind.
pub fn rewrite_file(input: &Path) -> Result<RewriteSummary> {
	let pattern = KwPattern::new()?;
	rewrite_file_with(input, &pattern)
}

/// Run the rewrite pass with an already-compiled pattern.
///
/// Rewritten lines are written through as they are read; a failure
/// mid-pass leaves whatever was already written in place.
pub fn rewrite_file_with(input: &Path, pattern: &KwPattern) -> Result<RewriteSummary> {
	let infile = File::open(input).map_err(|source| {
		if source.kind() == io::ErrorKind::NotFound {
			KwsubError::InputNotFound {
				path: input.to_path_buf(),
			}
		} else {
			KwsubError::ReadFailed {
				path: input.to_path_buf(),
				source,
			}
		}
	})?;

	let output_path = derive_output_path(input);
	let outfile = File::create(&output_path).map_err(|source| KwsubError::WriteFailed {
		path: output_path.clone(),
		source,
	})?;

	let mut reader = BufReader::new(infile);
	let mut writer = BufWriter::new(outfile);
	let mut line = String::new();
	let mut lines = 0;
	let mut replacements = 0;

	loop {
		line.clear();
		// read_line keeps the trailing newline, so line endings pass
		// through to the output untouched.
		let read = reader
			.read_line(&mut line)
			.map_err(|source| KwsubError::ReadFailed {
				path: input.to_path_buf(),
				source,
			})?;
		if read == 0 {
			break;
		}

		let (rewritten, count) = pattern.rewrite_line(&line);
		writer
			.write_all(rewritten.as_bytes())
			.map_err(|source| KwsubError::WriteFailed {
				path: output_path.clone(),
				source,
			})?;

		lines += 1;
		replacements += count;
	}

	writer.flush().map_err(|source| KwsubError::WriteFailed {
		path: output_path.clone(),
		source,
	})?;

	Ok(RewriteSummary {
		output_path,
		lines,
		replacements,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_derive_output_path_go_extension() {
		assert_eq!(
			derive_output_path(Path::new("reader.go")),
			PathBuf::from("reader_replaced.go")
		);
	}

	#[test]
	fn test_derive_output_path_other_extension_rewritten_to_go() {
		assert_eq!(
			derive_output_path(Path::new("notes.txt")),
			PathBuf::from("notes_replaced.go")
		);
	}

	#[test]
	fn test_derive_output_path_no_extension() {
		assert_eq!(
			derive_output_path(Path::new("Makefile")),
			PathBuf::from("Makefile_replaced.go")
		);
	}

	#[test]
	fn test_derive_output_path_only_strips_final_extension() {
		assert_eq!(
			derive_output_path(Path::new("archive.tar.gz")),
			PathBuf::from("archive.tar_replaced.go")
		);
	}

	#[test]
	fn test_derive_output_path_ignores_dotted_directories() {
		assert_eq!(
			derive_output_path(Path::new("pkg.v2/eval.go")),
			PathBuf::from("pkg.v2/eval_replaced.go")
		);
	}

	#[test]
	fn test_derive_output_path_dotfile() {
		assert_eq!(
			derive_output_path(Path::new(".hidden")),
			PathBuf::from(".hidden_replaced.go")
		);
	}

	#[test]
	fn test_rewrite_file_basic() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("eval.go");
		fs::write(&input, "x := kw(\"move-up\")\nplain line\n").unwrap();

		let summary = rewrite_file(&input).unwrap();
		assert_eq!(summary.output_path, dir.path().join("eval_replaced.go"));
		assert_eq!(summary.lines, 2);
		assert_eq!(summary.replacements, 1);

		let output = fs::read_to_string(&summary.output_path).unwrap();
		assert_eq!(output, "x := KWMoveUp\nplain line\n");
	}

	#[test]
	fn test_rewrite_file_leaves_input_untouched() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("eval.go");
		let content = "y := kw(\"ready?\")\n";
		fs::write(&input, content).unwrap();

		rewrite_file(&input).unwrap();

		assert_eq!(fs::read_to_string(&input).unwrap(), content);
	}

	#[test]
	fn test_rewrite_file_missing_input() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("nope.go");

		let err = rewrite_file(&input).unwrap_err();
		match err {
			KwsubError::InputNotFound { path } => assert_eq!(path, input),
			other => panic!("Expected InputNotFound, got {other:?}"),
		}

		// A missing input must not leave an output file behind.
		assert!(!dir.path().join("nope_replaced.go").exists());
	}

	#[test]
	fn test_rewrite_file_preserves_crlf_endings() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("win.go");
		fs::write(&input, "a := kw(\"a-b\")\r\nplain\r\n").unwrap();

		let summary = rewrite_file(&input).unwrap();
		let output = fs::read_to_string(&summary.output_path).unwrap();
		assert_eq!(output, "a := KWAB\r\nplain\r\n");
	}

	#[test]
	fn test_rewrite_file_preserves_missing_final_newline() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("tail.go");
		fs::write(&input, "first\nlast := kw(\"fire!\")").unwrap();

		let summary = rewrite_file(&input).unwrap();
		let output = fs::read_to_string(&summary.output_path).unwrap();
		assert_eq!(output, "first\nlast := KWFireBang");
	}

	#[test]
	fn test_rewrite_file_without_matches_copies_bytes() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("plain.go");
		let content = "package main\n\nfunc main() {}\n";
		fs::write(&input, content).unwrap();

		let summary = rewrite_file(&input).unwrap();
		assert_eq!(summary.replacements, 0);
		assert_eq!(fs::read(&summary.output_path).unwrap(), content.as_bytes());
	}

	#[test]
	fn test_rewrite_file_overwrites_existing_output() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("eval.go");
		fs::write(&input, "x := kw(\"a\")\n").unwrap();
		fs::write(dir.path().join("eval_replaced.go"), "stale content\n").unwrap();

		let summary = rewrite_file(&input).unwrap();
		let output = fs::read_to_string(&summary.output_path).unwrap();
		assert_eq!(output, "x := KWA\n");
	}
}
