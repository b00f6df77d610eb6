//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// folio - Filter, rank and sort portfolio projects from the command line
#[derive(Parser, Debug, Default)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Filter, rank and sort portfolio projects from the portfolio API", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file to use instead of ~/.config/folio/settings.conf
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Portfolio API base URL (overrides api_base_url from settings)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Read projects from a JSON file instead of the API
    #[arg(long)]
    pub projects_file: Option<PathBuf>,

    /// Read categories from a JSON file instead of the API
    #[arg(long)]
    pub categories_file: Option<PathBuf>,

    /// Search text; whitespace-separated keywords
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category tab: "all", "uncategorized" or a category id
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Only show projects of this type (e.g. github, custom)
    #[arg(short = 't', long = "type")]
    pub project_type: Option<String>,

    /// Only show projects carrying at least one of these tags (repeatable)
    #[arg(long = "tag", num_args = 1..)]
    pub tags: Vec<String>,

    /// Sort key without search: date or name (default from settings)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction without search: asc or desc (default from settings)
    #[arg(long)]
    pub sort_order: Option<String>,

    /// Ordering of equal relevance scores: input_order or user_sort
    #[arg(long)]
    pub tie_break: Option<String>,

    /// Print the available type and tag filters
    #[arg(long)]
    pub facets: bool,

    /// Print the category tabs with their project counts
    #[arg(long)]
    pub tabs: bool,

    /// Print the language breakdown of each project
    #[arg(long)]
    pub languages: bool,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,

    /// Read search text line by line from stdin and print each debounced result
    #[arg(short, long)]
    pub interactive: bool,
}
