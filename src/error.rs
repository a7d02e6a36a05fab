use std::path::PathBuf;

/// Library-level structured errors for kwsub.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum KwsubError {
	#[error("File not found: {path}")]
	InputNotFound { path: PathBuf },

	#[error("Failed to read input file: {path}")]
	ReadFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write output file: {path}")]
	WriteFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid keyword call pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

/// Result type alias using KwsubError.
pub type Result<T> = std::result::Result<T, KwsubError>;
