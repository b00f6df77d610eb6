//! Data retrieval: the portfolio REST API and JSON files on disk.

use std::path::Path;

mod api;
mod parse;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use api::{ApiClient, DEFAULT_CATEGORIES_PATH, DEFAULT_PROJECTS_PATH};
pub use parse::{
    categories_from_body, extract_list, parse_category, parse_project, projects_from_body,
};

use crate::state::{Category, Project};

/// Read and parse a JSON file.
fn read_json(path: &Path) -> Result<serde_json::Value> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("Invalid JSON in {}: {e}", path.display()).into())
}

/// What: Load projects from a JSON file in the API's response shape.
///
/// Inputs:
/// - `path`: File holding a project array or an API envelope
///
/// Output:
/// - `Ok(projects)` in file order.
///
/// # Errors
/// - Returns `Err` when the file cannot be read, is not JSON, or holds no list.
pub fn load_projects_file(path: &Path) -> Result<Vec<Project>> {
    projects_from_body(&read_json(path)?)
}

/// What: Load categories from a JSON file in the API's response shape.
///
/// Inputs:
/// - `path`: File holding a category array or an API envelope
///
/// Output:
/// - `Ok(categories)` in file order.
///
/// # Errors
/// - Returns `Err` when the file cannot be read, is not JSON, or holds no list.
pub fn load_categories_file(path: &Path) -> Result<Vec<Category>> {
    categories_from_body(&read_json(path)?)
}
