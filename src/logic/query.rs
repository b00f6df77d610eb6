/// What: Split search text into lower-cased keywords.
///
/// Inputs:
/// - `search_text`: Raw text from the search box.
///
/// Output:
/// - Keywords in input order; empty when the text is blank.
///
/// Details:
/// - Splits on runs of Unicode whitespace.
/// - An empty result disables both the text filter and relevance ranking.
#[must_use]
pub fn tokenize(search_text: &str) -> Vec<String> {
    search_text
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
