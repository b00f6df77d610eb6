//! Concrete listing scenarios.
//!
//! Tests cover:
//! - Keyword relevance ranking
//! - Tag and category filters
//! - Date ordering
//! - Language breakdown
//! - Empty input

use folio::logic::{ProjectView, compute_visible_projects, language_breakdown};
use folio::state::{CategorySelection, FilterInput, Project, SortBy, SortOrder};

use super::common::{languages, project};

fn ids(projects: &[folio::state::VisibleProject<'_>]) -> Vec<String> {
    projects.iter().map(|v| v.project.id.clone()).collect()
}

#[test]
/// What: Substring title matches outrank description-only matches.
///
/// Inputs:
/// - "Chat Bot", "Weather App", "Bot Dashboard" and a project mentioning "bot" only in its description.
///
/// Output:
/// - Both bot titles ranked above the description match; "Weather App" excluded.
///
/// Details:
/// - Equal scores keep input order.
fn integration_search_bot_ranking() {
    let projects = vec![
        project("chat", "Chat Bot"),
        project("weather", "Weather App"),
        project("dash", "Bot Dashboard"),
        Project {
            description: "Talks to a bot".into(),
            ..project("helper", "Helper")
        },
    ];
    let input = FilterInput {
        search_text: "bot".into(),
        ..Default::default()
    };
    let visible = compute_visible_projects(&projects, &input);
    assert_eq!(ids(&visible), vec!["chat", "dash", "helper"]);
    assert!(visible[0].relevance_score > visible[2].relevance_score);
    assert!(visible[1].relevance_score > visible[2].relevance_score);
}

#[test]
/// What: Tag filter includes on any shared tag.
///
/// Inputs:
/// - Project tagged React and Go; filters Go, then Rust.
///
/// Output:
/// - Included for Go, excluded for Rust.
fn integration_tag_filter() {
    let projects = vec![Project {
        tags: vec!["React".into(), "Go".into()],
        ..project("p", "Portfolio")
    }];
    let with = |tag: &str| FilterInput {
        selected_tags: vec![tag.to_string()],
        ..Default::default()
    };
    assert_eq!(compute_visible_projects(&projects, &with("Go")).len(), 1);
    assert!(compute_visible_projects(&projects, &with("Rust")).is_empty());
}

#[test]
/// What: Date ascending puts the older project first.
///
/// Inputs:
/// - Projects created 2024-01-01 and 2023-01-01, listed newest first.
///
/// Output:
/// - 2023 before 2024.
fn integration_date_ascending() {
    let projects = vec![
        Project {
            created_at: Some("2024-01-01".into()),
            ..project("2024", "New")
        },
        Project {
            created_at: Some("2023-01-01".into()),
            ..project("2023", "Old")
        },
    ];
    let input = FilterInput {
        sort_by: SortBy::Date,
        sort_order: SortOrder::Asc,
        ..Default::default()
    };
    assert_eq!(
        ids(&compute_visible_projects(&projects, &input)),
        vec!["2023", "2024"]
    );
}

#[test]
/// What: Uncategorized projects appear under "uncategorized" and "all" only.
///
/// Inputs:
/// - Project without category; selections uncategorized, all, cat-1.
///
/// Output:
/// - Included, included, excluded.
fn integration_uncategorized_selection() {
    let projects = vec![project("orphan", "Orphan")];
    let with = |category: CategorySelection| FilterInput {
        category,
        ..Default::default()
    };
    assert_eq!(
        compute_visible_projects(&projects, &with(CategorySelection::Uncategorized)).len(),
        1
    );
    assert_eq!(
        compute_visible_projects(&projects, &with(CategorySelection::All)).len(),
        1
    );
    assert!(
        compute_visible_projects(&projects, &with(CategorySelection::Id("cat-1".into())))
            .is_empty()
    );
}

#[test]
/// What: Language breakdown of a two-language project.
///
/// Inputs:
/// - JavaScript 300 bytes, CSS 100 bytes.
///
/// Output:
/// - JavaScript 75% listed first, CSS 25%.
fn integration_language_breakdown() {
    let data = languages(&[("JavaScript", 300), ("CSS", 100)]);
    let shares = language_breakdown(&data.languages);
    assert_eq!(shares[0].name, "JavaScript");
    assert!((shares[0].percent - 75.0).abs() < 1e-9);
    assert_eq!(shares[1].name, "CSS");
    assert!((shares[1].percent - 25.0).abs() < 1e-9);
}

#[test]
/// What: Empty project list with every filter active.
///
/// Inputs:
/// - No projects; search, type, tags and a category id set.
///
/// Output:
/// - Empty visible list, empty facets, only the "All" tab.
fn integration_empty_projects() {
    let input = FilterInput {
        category: CategorySelection::Id("cat-1".into()),
        search_text: "anything at all".into(),
        selected_type: "github".into(),
        selected_tags: vec!["Go".into()],
        sort_by: SortBy::Name,
        sort_order: SortOrder::Asc,
        ..Default::default()
    };
    assert!(compute_visible_projects(&[], &input).is_empty());
    let view = ProjectView::build(&[], &[], &input);
    assert!(view.visible.is_empty());
    assert!(view.facets.types.is_empty() && view.facets.tags.is_empty());
    assert_eq!(view.tabs.len(), 1);
}

#[test]
/// What: Languages are searchable and score as tags do.
///
/// Inputs:
/// - One project written in Rust, one mentioning rust in its title.
///
/// Output:
/// - Both match "rust"; exact language (4) ranks below partial title (5).
fn integration_language_search() {
    let projects = vec![
        Project {
            additional_data: languages(&[("Rust", 1000)]),
            ..project("lang", "Terminal UI")
        },
        project("title", "Rusty Notes"),
    ];
    let input = FilterInput {
        search_text: "RUST".into(),
        ..Default::default()
    };
    let visible = compute_visible_projects(&projects, &input);
    assert_eq!(ids(&visible), vec!["title", "lang"]);
    assert_eq!(visible[0].relevance_score, Some(5));
    assert_eq!(visible[1].relevance_score, Some(4));
}
