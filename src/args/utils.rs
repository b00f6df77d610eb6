//! Shared utilities for argument processing.

use crate::config::Settings;
use crate::state::{CategorySelection, FilterInput, RelevanceTieBreak, SortBy, SortOrder};

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log filter string (trace, debug, info, warn, error, or a `RUST_LOG` directive).
///
/// Details:
/// - Verbose flag overrides `--log-level`.
/// - A non-empty `RUST_LOG` wins over the default `info` level but not over explicit flags.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        return "debug".to_string();
    }
    if args.log_level == "info"
        && let Ok(env) = std::env::var("RUST_LOG")
        && !env.trim().is_empty()
    {
        return env;
    }
    args.log_level.clone()
}

/// What: Build the filter controls from arguments and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Loaded settings supplying sort defaults.
///
/// Output:
/// - `Ok(FilterInput)`; `Err(message)` naming the first unrecognized sort, order or
///   tie-break value.
///
/// # Errors
/// - Returns `Err` for unknown `--sort-by`, `--sort-order` or `--tie-break` values.
pub fn filter_input_from_args(args: &crate::args::Args, settings: &Settings) -> Result<FilterInput, String> {
    let sort_by = match args.sort_by.as_deref() {
        Some(raw) => SortBy::from_config_key(raw)
            .ok_or_else(|| format!("unknown sort key '{raw}' (expected date or name)"))?,
        None => settings.sort_by,
    };
    let sort_order = match args.sort_order.as_deref() {
        Some(raw) => SortOrder::from_config_key(raw)
            .ok_or_else(|| format!("unknown sort order '{raw}' (expected asc or desc)"))?,
        None => settings.sort_order,
    };
    let tie_break = match args.tie_break.as_deref() {
        Some(raw) => RelevanceTieBreak::from_config_key(raw).ok_or_else(|| {
            format!("unknown tie-break '{raw}' (expected input_order or user_sort)")
        })?,
        None => settings.relevance_tie_break,
    };
    Ok(FilterInput {
        category: CategorySelection::from_key(&args.category),
        search_text: args.search.clone().unwrap_or_default(),
        selected_type: args.project_type.clone().unwrap_or_default(),
        selected_tags: parse_tag_list(&args.tags),
        sort_by,
        sort_order,
        tie_break,
    })
}

/// What: Parse tags from input, handling both comma-separated and repeated flags.
///
/// Inputs:
/// - `tags`: Raw tag arguments (may contain comma-separated values).
///
/// Output:
/// - Individual tags, trimmed, empties and duplicates removed, first occurrence kept.
#[must_use]
pub fn parse_tag_list(tags: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for raw in tags {
        for tag in raw.split(',') {
            let trimmed = tag.trim();
            if !trimmed.is_empty() && !result.iter().any(|t| t == trimmed) {
                result.push(trimmed.to_string());
            }
        }
    }
    result
}
