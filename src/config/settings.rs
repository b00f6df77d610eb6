use std::path::Path;

use tracing::{debug, warn};

use crate::config::paths::resolve_settings_config_path;
use crate::logic::search::DEFAULT_DEBOUNCE_MS;
use crate::state::{RelevanceTieBreak, SortBy, SortOrder};
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// User settings read from `settings.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root URL of the portfolio API; empty when not configured.
    pub api_base_url: String,
    /// Path of the projects endpoint.
    pub projects_path: String,
    /// Path of the categories endpoint.
    pub categories_path: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Default sort key.
    pub sort_by: SortBy,
    /// Default sort direction.
    pub sort_order: SortOrder,
    /// Ordering among equal relevance scores.
    pub relevance_tie_break: RelevanceTieBreak,
    /// Debounce window of interactive search in milliseconds.
    pub search_debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            projects_path: crate::sources::DEFAULT_PROJECTS_PATH.to_string(),
            categories_path: crate::sources::DEFAULT_CATEGORIES_PATH.to_string(),
            request_timeout_secs: 10,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            relevance_tie_break: RelevanceTieBreak::default(),
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings file.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys and invalid values are logged and ignored, keeping the previous value.
/// - Key aliases: `api_url`/`api` for `api_base_url`, `sort`/`results_sort` for `sort_by`,
///   `order` for `sort_order`, `timeout` for `request_timeout_secs`.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        let applied = match key.as_str() {
            "api_base_url" | "api_url" | "api" => {
                settings.api_base_url = val.clone();
                true
            }
            "projects_path" => {
                settings.projects_path = val.clone();
                !val.is_empty()
            }
            "categories_path" => {
                settings.categories_path = val.clone();
                !val.is_empty()
            }
            "request_timeout_secs" | "timeout" => val
                .parse::<u64>()
                .ok()
                .filter(|v| *v > 0)
                .map(|v| settings.request_timeout_secs = v)
                .is_some(),
            "sort_by" | "sort" | "results_sort" => SortBy::from_config_key(&val)
                .map(|v| settings.sort_by = v)
                .is_some(),
            "sort_order" | "order" => SortOrder::from_config_key(&val)
                .map(|v| settings.sort_order = v)
                .is_some(),
            "relevance_tie_break" => RelevanceTieBreak::from_config_key(&val)
                .map(|v| settings.relevance_tie_break = v)
                .is_some(),
            "search_debounce_ms" | "debounce_ms" => val
                .parse::<u64>()
                .ok()
                .map(|v| settings.search_debounce_ms = v)
                .is_some(),
            _ => {
                debug!(key = %key, "ignoring unknown setting");
                continue;
            }
        };
        if !applied {
            warn!(key = %key, value = %val, "invalid setting value; keeping previous");
        }
    }
    if settings.projects_path.is_empty() {
        settings.projects_path = crate::sources::DEFAULT_PROJECTS_PATH.to_string();
    }
    if settings.categories_path.is_empty() {
        settings.categories_path = crate::sources::DEFAULT_CATEGORIES_PATH.to_string();
    }
}

/// What: Load user settings.
///
/// Inputs:
/// - `explicit`: Settings file given on the command line, if any.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when no file exists or it
///   cannot be read.
///
/// Details:
/// - Without `explicit`, looks for `settings.conf` under HOME/XDG config directories.
#[must_use]
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let mut settings = Settings::default();
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(resolve_settings_config_path);
    let Some(path) = path else {
        debug!("no settings.conf found; using defaults");
        return settings;
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            parse_settings(&content, &mut settings);
            debug!(path = %path.display(), "settings loaded");
        }
        Err(e) => warn!(path = %path.display(), error = %e, "failed to read settings; using defaults"),
    }
    settings
}
