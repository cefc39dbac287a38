//! Minimal input sanitization helpers.

/// Strip angle brackets and surrounding whitespace from untrusted input.
///
/// This is not HTML escaping; it only removes the characters needed to
/// open or close a tag.
///
/// # Example
///
/// ```
/// use ordemo_leads::domain::sanitize;
///
/// assert_eq!(sanitize("  <b>Maria</b> "), "bMaria/b");
/// ```
pub fn sanitize(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| *c != '<' && *c != '>').collect();
    trim_text(&stripped).to_string()
}

/// Trim whitespace and byte order marks from both ends.
///
/// `str::trim` keeps U+FEFF; browsers strip it along with whitespace.
pub fn trim_text(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Length of `input` in UTF-16 code units, the unit browsers count in.
pub fn text_len(input: &str) -> usize {
    input.encode_utf16().count()
}

/// Keep only the ASCII digits of `input`.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
