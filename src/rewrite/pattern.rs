use crate::error::{KwsubError, Result};
use crate::rewrite::ident;
use regex::{Captures, Regex};

/// The textual shape of a keyword call: `kw(`, optional whitespace, a
/// double-quoted string literal (anything but `"` captured verbatim),
/// optional whitespace, `)`.
const KW_CALL_PATTERN: &str = r#"kw\(\s*"([^"]*)"\s*\)"#;

/// A compiled keyword-call pattern ready for line rewriting.
#[derive(Debug)]
pub struct KwPattern {
	regex: Regex,
}

impl KwPattern {
	/// Compile the keyword-call pattern.
	pub fn new() -> Result<Self> {
		let regex = Regex::new(KW_CALL_PATTERN).map_err(|source| KwsubError::InvalidPattern {
			pattern: KW_CALL_PATTERN.to_string(),
			source,
		})?;
		Ok(KwPattern { regex })
	}

	/// Rewrite every keyword call in `line`, left to right, without
	/// re-scanning replaced text. Returns the rewritten line and the number
	/// of substitutions made. A line with no match comes back unchanged.
	pub fn rewrite_line(&self, line: &str) -> (String, usize) {
		let mut count = 0;
		let rewritten = self.regex.replace_all(line, |caps: &Captures| {
			count += 1;
			ident::generate(&caps[1])
		});
		(rewritten.into_owned(), count)
	}
}
