use std::collections::BTreeMap;

use crate::state::LanguageShare;

/// What: Turn raw language byte counts into display percentages.
///
/// Inputs:
/// - `languages`: Language name to byte count
///
/// Output:
/// - One entry per language, largest first, with `percent = bytes / total * 100`.
///
/// Details:
/// - Equal byte counts are ordered by name.
/// - An empty map or a zero total yields an empty breakdown.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn language_breakdown(languages: &BTreeMap<String, u64>) -> Vec<LanguageShare> {
    let total: u64 = languages.values().fold(0, |acc, b| acc.saturating_add(*b));
    if total == 0 {
        return Vec::new();
    }
    let mut shares: Vec<LanguageShare> = languages
        .iter()
        .map(|(name, &bytes)| LanguageShare {
            name: name.clone(),
            bytes,
            percent: bytes as f64 / total as f64 * 100.0,
        })
        .collect();
    // BTreeMap iteration is name-ordered, the stable sort keeps that for ties.
    shares.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    shares
}
