//! Keyword relevance scoring for text search results.

use crate::logic::filter::SearchableText;

/// Points for a title equal to the keyword.
pub const TITLE_EXACT: u32 = 10;
/// Points for a title containing the keyword.
pub const TITLE_PARTIAL: u32 = 5;
/// Points for a tag equal to the keyword.
pub const TAG_EXACT: u32 = 4;
/// Points for a tag containing the keyword.
pub const TAG_PARTIAL: u32 = 3;
/// Points for a language name equal to the keyword.
pub const LANGUAGE_EXACT: u32 = 4;
/// Points for a language name containing the keyword.
pub const LANGUAGE_PARTIAL: u32 = 3;
/// Points for a description containing the keyword.
pub const DESCRIPTION_PARTIAL: u32 = 1;

/// Exact-or-partial score for a list of candidate values.
fn list_score(values: &[String], token: &str, exact: u32, partial: u32) -> u32 {
    if values.iter().any(|v| v == token) {
        exact
    } else if values.iter().any(|v| v.contains(token)) {
        partial
    } else {
        0
    }
}

/// What: Score a single keyword against one project.
///
/// Inputs:
/// - `text`: Lower-cased searchable fields
/// - `token`: Lower-cased keyword
///
/// Output:
/// - Sum of the field bonuses earned by `token`.
///
/// Details:
/// - Fields score independently; within a field the exact bonus replaces the partial one.
#[must_use]
pub fn token_score(text: &SearchableText, token: &str) -> u32 {
    let title = if text.title == token {
        TITLE_EXACT
    } else if text.title.contains(token) {
        TITLE_PARTIAL
    } else {
        0
    };
    let tags = list_score(&text.tags, token, TAG_EXACT, TAG_PARTIAL);
    let languages = list_score(&text.languages, token, LANGUAGE_EXACT, LANGUAGE_PARTIAL);
    let description = if text.description.contains(token) {
        DESCRIPTION_PARTIAL
    } else {
        0
    };
    title + tags + languages + description
}

/// What: Total relevance of a project for the given keywords.
///
/// Inputs:
/// - `text`: Lower-cased searchable fields
/// - `tokens`: Lower-cased keywords
///
/// Output:
/// - Sum of [`token_score`] over all keywords; `0` without keywords.
#[must_use]
pub fn relevance_score(text: &SearchableText, tokens: &[String]) -> u32 {
    tokens
        .iter()
        .map(|t| token_score(text, t))
        .fold(0, u32::saturating_add)
}
