//! Command-line front-end: loads settings and data, runs the engine, prints the view.

mod interactive;
pub mod render;

use std::time::Duration;

use crate::args::{Args, filter_input_from_args};
use crate::config::{Settings, load_settings};
use crate::logic::ProjectView;
use crate::sources::{ApiClient, load_categories_file, load_projects_file};
use crate::state::{Category, Project};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Resolve the API client from arguments and settings.
///
/// Inputs:
/// - `args`: Parsed arguments (`--api-url` wins)
/// - `settings`: Loaded settings
///
/// Output:
/// - `Ok(Some(client))` when a base URL is configured, `Ok(None)` otherwise.
///
/// # Errors
/// - Returns `Err` when the HTTP client cannot be built.
fn api_client(args: &Args, settings: &Settings) -> Result<Option<ApiClient>> {
    let base = args
        .api_url
        .clone()
        .unwrap_or_else(|| settings.api_base_url.clone());
    if base.trim().is_empty() {
        return Ok(None);
    }
    let client = ApiClient::new(&base, Duration::from_secs(settings.request_timeout_secs))?
        .with_paths(&settings.projects_path, &settings.categories_path);
    Ok(Some(client))
}

/// What: Load projects and categories from files or the API.
///
/// Inputs:
/// - `args`: Parsed arguments
/// - `settings`: Loaded settings
///
/// Output:
/// - `Ok((projects, categories))`.
///
/// # Errors
/// - Returns `Err` when no project source is configured or loading fails.
///
/// Details:
/// - Each collection comes from its file when given, otherwise from the API.
/// - Without a category source the category list is empty (only "All"/"Uncategorized" tabs).
pub async fn load_collections(
    args: &Args,
    settings: &Settings,
) -> Result<(Vec<Project>, Vec<Category>)> {
    let client = api_client(args, settings)?;
    let projects = match (&args.projects_file, &client) {
        (Some(path), _) => load_projects_file(path)?,
        (None, Some(c)) => c.fetch_projects().await?,
        (None, None) => {
            return Err(
                "no project source: pass --projects-file or --api-url, or set api_base_url in settings.conf"
                    .into(),
            );
        }
    };
    let categories = match (&args.categories_file, &client) {
        (Some(path), _) => load_categories_file(path)?,
        (None, Some(c)) => c.fetch_categories().await?,
        (None, None) => {
            tracing::debug!("no category source; using an empty category list");
            Vec::new()
        }
    };
    Ok((projects, categories))
}

/// What: Run the command-line front-end.
///
/// Inputs:
/// - `args`: Parsed arguments
///
/// Output:
/// - `Ok(())` after printing the view (or finishing the interactive loop).
///
/// # Errors
/// - Returns `Err` for invalid sort arguments, data loading failures and output errors.
pub async fn run(args: &Args) -> Result<()> {
    let settings = load_settings(args.config.as_deref());
    let input = filter_input_from_args(args, &settings)?;
    let (projects, categories) = load_collections(args, &settings).await?;
    tracing::info!(
        projects = projects.len(),
        categories = categories.len(),
        "collections loaded"
    );

    let options = render::RenderOptions {
        facets: args.facets,
        tabs: args.tabs,
        languages: args.languages,
        json: args.json,
    };
    if args.interactive {
        return interactive::run(
            projects,
            categories,
            input,
            Duration::from_millis(settings.search_debounce_ms),
            options,
        )
        .await;
    }

    let view = ProjectView::build(&projects, &categories, &input);
    let mut out = std::io::stdout().lock();
    render::write_view(&mut out, &view, &input.category, options)?;
    Ok(())
}
