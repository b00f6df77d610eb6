//! Plain-text and JSON rendering of a computed view.

use std::io::{self, Write};

use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::logic::{ProjectView, language_breakdown};
use crate::state::{
    CategorySelection, CategoryTab, Facets, LanguageShare, ViewResults, VisibleProject,
};

/// Display width of the title column.
const TITLE_WIDTH: usize = 32;

/// Which optional sections to print.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Print the type/tag facets.
    pub facets: bool,
    /// Print the category tabs.
    pub tabs: bool,
    /// Print each project's language breakdown.
    pub languages: bool,
    /// Emit JSON instead of text; the JSON document always carries facets and tabs.
    pub json: bool,
}

/// What: Fit text into a fixed display width.
///
/// Inputs:
/// - `text`: Text to fit
/// - `width`: Target width in terminal columns
///
/// Output:
/// - `text` padded with spaces, or cut and ended with `…` when too wide.
#[must_use]
pub fn fit_width(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    if w <= width {
        return format!("{text}{}", " ".repeat(width - w));
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Write the visible list, one project per line.
fn write_visible<W: Write>(
    out: &mut W,
    visible: &[VisibleProject<'_>],
    languages: bool,
) -> io::Result<()> {
    if visible.is_empty() {
        return writeln!(out, "No projects match the current filters.");
    }
    for (idx, item) in visible.iter().enumerate() {
        let p = item.project;
        let date = crate::util::short_date(p.created_at.as_deref());
        let score = item
            .relevance_score
            .map(|s| format!(" [score {s}]"))
            .unwrap_or_default();
        let tags = if p.tags.is_empty() {
            String::new()
        } else {
            format!("  {}", p.tags.join(", "))
        };
        writeln!(
            out,
            "{:>3}. {} {:<8} {:<10}{score}{tags}",
            idx + 1,
            fit_width(&p.title, TITLE_WIDTH),
            p.kind,
            date
        )?;
        if languages {
            for share in language_breakdown(&p.additional_data.languages) {
                writeln!(out, "       {:<16} {:>5.1}%", share.name, share.percent)?;
            }
        }
    }
    Ok(())
}

/// Write the type and tag facets.
fn write_facets<W: Write>(out: &mut W, facets: &Facets) -> io::Result<()> {
    writeln!(out, "Types: {}", facets.types.join(", "))?;
    writeln!(out, "Tags:  {}", facets.tags.join(", "))
}

/// Write the category tabs, marking the active one with `*`.
fn write_tabs<W: Write>(
    out: &mut W,
    tabs: &[CategoryTab],
    active: &CategorySelection,
) -> io::Result<()> {
    let line = tabs
        .iter()
        .map(|t| {
            let mark = if &t.selection == active { "*" } else { "" };
            format!("{mark}{} ({})", t.label, t.count)
        })
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "Tabs: {line}")
}

/// What: Render a view as text.
///
/// Inputs:
/// - `out`: Destination
/// - `view`: Computed view
/// - `active`: Selected category, marked in the tab line
/// - `options`: Optional sections
///
/// Output:
/// - `Ok(())` after writing; `Err` on I/O failure.
///
/// # Errors
/// - Propagates write errors from `out`.
pub fn write_text<W: Write>(
    out: &mut W,
    view: &ProjectView<'_>,
    active: &CategorySelection,
    options: RenderOptions,
) -> io::Result<()> {
    if options.tabs {
        write_tabs(out, &view.tabs, active)?;
    }
    if options.facets {
        write_facets(out, &view.facets)?;
    }
    write_visible(out, &view.visible, options.languages)
}

/// What: Render a view in the format chosen by `options`.
///
/// Inputs:
/// - `out`: Destination
/// - `view`: Computed view
/// - `active`: Selected category, marked in the tab line
/// - `options`: Output format and optional sections
///
/// Output:
/// - `Ok(())` after writing; `Err` on I/O or serialization failure.
///
/// # Errors
/// - Propagates write and serialization errors.
pub fn write_view<W: Write>(
    out: &mut W,
    view: &ProjectView<'_>,
    active: &CategorySelection,
    options: RenderOptions,
) -> io::Result<()> {
    if options.json {
        write_json(out, view, options.languages)
    } else {
        write_text(out, view, active, options)
    }
}

/// What: Render worker results like a directly computed view.
///
/// Inputs:
/// - `out`: Destination
/// - `results`: Owned results from the search worker
/// - `active`: Selected category, marked in the tab line
/// - `options`: Output format and optional sections
///
/// Output:
/// - `Ok(())` after writing; `Err` on I/O or serialization failure.
///
/// Details:
/// - Text output is preceded by a `-- N project(s)` separator line.
///
/// # Errors
/// - Propagates write and serialization errors.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &ViewResults,
    active: &CategorySelection,
    options: RenderOptions,
) -> io::Result<()> {
    let view = ProjectView {
        visible: results
            .items
            .iter()
            .map(|(project, relevance_score)| VisibleProject {
                project,
                relevance_score: *relevance_score,
            })
            .collect(),
        facets: results.facets.clone(),
        tabs: results.tabs.clone(),
    };
    if !options.json {
        writeln!(out, "-- {} project(s)", view.visible.len())?;
    }
    write_view(out, &view, active, options)
}

/// One project of the JSON output.
#[derive(Serialize)]
struct JsonProject<'a> {
    /// Project fields plus relevance score.
    #[serde(flatten)]
    item: &'a VisibleProject<'a>,
    /// Language shares when requested.
    #[serde(rename = "languageBreakdown", skip_serializing_if = "Option::is_none")]
    languages: Option<Vec<LanguageShare>>,
}

/// JSON document written by [`write_json`].
#[derive(Serialize)]
struct JsonView<'a> {
    /// Visible projects in display order.
    projects: Vec<JsonProject<'a>>,
    /// Facets of the category-filtered set.
    facets: &'a Facets,
    /// Category tabs.
    tabs: &'a [CategoryTab],
}

/// What: Render a view as pretty-printed JSON.
///
/// Inputs:
/// - `out`: Destination
/// - `view`: Computed view
/// - `languages`: Whether to attach each project's language breakdown
///
/// Output:
/// - `Ok(())` after writing; `Err` on I/O or serialization failure.
///
/// # Errors
/// - Propagates write and serialization errors.
pub fn write_json<W: Write>(out: &mut W, view: &ProjectView<'_>, languages: bool) -> io::Result<()> {
    let doc = JsonView {
        projects: view
            .visible
            .iter()
            .map(|item| JsonProject {
                item,
                languages: languages
                    .then(|| language_breakdown(&item.project.additional_data.languages)),
            })
            .collect(),
        facets: &view.facets,
        tabs: &view.tabs,
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}
