//! Lenient decoding of portfolio API payloads.

use serde_json::Value;

use crate::state::{AdditionalData, Category, Project};
use crate::util::{arrs, bool_of, count_of, id_of, s};

/// Object keys that may wrap the list in a response envelope.
const LIST_KEYS: [&str; 4] = ["data", "items", "projects", "categories"];

/// What: Locate the list of records in a response body.
///
/// Inputs:
/// - `body`: Parsed JSON response
///
/// Output:
/// - `Some(records)` for a bare array or an object wrapping one under a known key;
///   `None` for any other shape.
///
/// Details:
/// - Envelopes may nest once more, e.g. `{ "data": { "items": [...] } }`.
#[must_use]
pub fn extract_list(body: &Value) -> Option<&Vec<Value>> {
    if let Some(arr) = body.as_array() {
        return Some(arr);
    }
    let obj = body.as_object()?;
    LIST_KEYS.iter().find_map(|k| match obj.get(*k)? {
        Value::Array(arr) => Some(arr),
        inner @ Value::Object(_) => extract_list(inner),
        _ => None,
    })
}

/// What: Decode one project record.
///
/// Inputs:
/// - `v`: JSON object of a project
///
/// Output:
/// - The project with missing or `null` fields normalized; `None` when `v` is not an object.
///
/// Details:
/// - Ids given as numbers become decimal strings.
/// - Non-string tags and invalid language counts are dropped.
#[must_use]
pub fn parse_project(v: &Value) -> Option<Project> {
    if !v.is_object() {
        return None;
    }
    let languages = v
        .get("additional_data")
        .and_then(|a| a.get("languages"))
        .and_then(Value::as_object)
        .map(|langs| {
            langs
                .iter()
                .filter_map(|(name, n)| count_of(n).map(|bytes| (name.clone(), bytes)))
                .collect()
        })
        .unwrap_or_default();
    let created_at = s(v, "created_at");
    Some(Project {
        id: id_of(v, "id").unwrap_or_default(),
        title: s(v, "title"),
        description: s(v, "description"),
        kind: s(v, "type"),
        tags: arrs(v, "tags"),
        project_category_id: id_of(v, "project_category_id"),
        created_at: (!created_at.trim().is_empty()).then_some(created_at),
        additional_data: AdditionalData { languages },
    })
}

/// What: Decode one category record.
///
/// Inputs:
/// - `v`: JSON object of a category
///
/// Output:
/// - The category; `None` when `v` is not an object or has no id.
///
/// Details:
/// - A missing or unrecognized `is_visible` counts as visible.
#[must_use]
pub fn parse_category(v: &Value) -> Option<Category> {
    Some(Category {
        id: id_of(v, "id")?,
        name: s(v, "name"),
        is_visible: bool_of(v, "is_visible").unwrap_or(true),
    })
}

/// What: Decode all projects of a response body.
///
/// Inputs:
/// - `body`: Parsed JSON response
///
/// Output:
/// - `Ok(projects)` in payload order, skipping non-object entries.
///
/// # Errors
/// - Returns `Err` when the body holds no recognizable list.
pub fn projects_from_body(body: &Value) -> super::Result<Vec<Project>> {
    let list = extract_list(body).ok_or("projects payload is not a list")?;
    let projects: Vec<Project> = list.iter().filter_map(parse_project).collect();
    if projects.len() != list.len() {
        tracing::warn!(
            skipped = list.len() - projects.len(),
            "skipped malformed project records"
        );
    }
    Ok(projects)
}

/// What: Decode all categories of a response body.
///
/// Inputs:
/// - `body`: Parsed JSON response
///
/// Output:
/// - `Ok(categories)` in payload order, skipping records without id.
///
/// # Errors
/// - Returns `Err` when the body holds no recognizable list.
pub fn categories_from_body(body: &Value) -> super::Result<Vec<Category>> {
    let list = extract_list(body).ok_or("categories payload is not a list")?;
    let categories: Vec<Category> = list.iter().filter_map(parse_category).collect();
    if categories.len() != list.len() {
        tracing::warn!(
            skipped = list.len() - categories.len(),
            "skipped malformed category records"
        );
    }
    Ok(categories)
}
