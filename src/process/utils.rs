/// Trim whitespace, then drop one leading and one trailing `"` if present.
///
/// Embedded doubled quotes (`""`) are left as they are.
pub fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Split a data line on commas that sit outside double quotes.
///
/// A comma separates fields only when the rest of the line after it holds an
/// even number of `"` characters, so `"Meeting, Room A"` stays one token.
/// Tokens are returned raw; run them through [`clean_field`].
pub fn split_quoted(line: &str) -> Vec<&str> {
    let mut remaining_quotes = line.bytes().filter(|&b| b == b'"').count();
    let mut tokens = Vec::new();
    let mut start = 0;

    for (idx, b) in line.bytes().enumerate() {
        match b {
            b'"' => remaining_quotes -= 1,
            b',' if remaining_quotes % 2 == 0 => {
                tokens.push(&line[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    tokens.push(&line[start..]);
    tokens
}
