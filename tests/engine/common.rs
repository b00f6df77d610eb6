//! Shared builders for engine tests.

use std::collections::BTreeMap;

use folio::state::{AdditionalData, Project};

/// What: Create a test project.
///
/// Inputs:
/// - `id`: Project id
/// - `title`: Project title
///
/// Output:
/// - `Project` of type `github` with no tags, category or date
///
/// Details:
/// - Callers adjust the remaining fields with struct update syntax
pub fn project(id: &str, title: &str) -> Project {
    Project {
        id: id.into(),
        title: title.into(),
        kind: "github".into(),
        ..Default::default()
    }
}

/// What: Build a language map from pairs.
///
/// Inputs:
/// - `entries`: Language name and byte count pairs
///
/// Output:
/// - `AdditionalData` holding the map
pub fn languages(entries: &[(&str, u64)]) -> AdditionalData {
    AdditionalData {
        languages: entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect::<BTreeMap<_, _>>(),
    }
}
