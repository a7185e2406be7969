//! Free-text tag parsing for journal entries.

/// Split free-text tag input into a deduplicated list of tokens.
///
/// Splits on any run of commas or whitespace, trims each token, drops
/// empties, and keeps the first occurrence of each tag in input order.
/// Deduplication is case-sensitive.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if !tags.iter().any(|t| t == token) {
            tags.push(token.to_string());
        }
    }
    tags
}
