/// Synthesize a `KW`-prefixed identifier from a keyword literal.
///
/// A literal ending in `?` gets an `Is` marker after the `KW` prefix; a
/// literal ending in `!` gets a trailing `Bang` marker. The remaining text
/// is split into words on `-`, `/`, and whitespace, and each word is joined
/// back capitalized. The empty literal yields bare `KW`.
pub fn generate(literal: &str) -> String {
	// Quotes are already excluded by the capture group, but tolerate a
	// still-quoted literal from direct callers.
	let s = literal.strip_prefix('"').unwrap_or(literal);
	let mut s = s.strip_suffix('"').unwrap_or(s);

	let mut prefix = "";
	let mut suffix = "";
	if let Some(trimmed) = s.strip_suffix('?') {
		prefix = "Is";
		s = trimmed;
	} else if let Some(trimmed) = s.strip_suffix('!') {
		suffix = "Bang";
		s = trimmed;
	}

	let normalized: String = s
		.chars()
		.map(|c| if c == '-' || c == '/' { ' ' } else { c })
		.collect();

	let mut ident = String::with_capacity(normalized.len() + 8);
	ident.push_str("KW");
	ident.push_str(prefix);
	for word in normalized.split_whitespace() {
		push_capitalized(&mut ident, word);
	}
	ident.push_str(suffix);
	ident
}

/// Append `word` with its first character uppercased and the rest lowercased.
fn push_capitalized(out: &mut String, word: &str) {
	let mut chars = word.chars();
	if let Some(first) = chars.next() {
		out.extend(first.to_uppercase());
		out.extend(chars.flat_map(char::to_lowercase));
	}
}
