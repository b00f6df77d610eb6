//! Property tests for the listing engine.

use std::collections::HashSet;

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

use folio::logic::{compute_visible_projects, language_breakdown};
use folio::state::{
    AdditionalData, CategorySelection, FilterInput, Project, SortBy, SortOrder, VisibleProject,
};
use folio::util::parse_timestamp_millis;

use super::common::project;

const WORDS: [&str; 8] = ["chat", "bot", "weather", "app", "dash", "rust", "go", "notes"];
const TAGS: [&str; 5] = ["React", "Go", "Rust", "CLI", "Web"];
const LANGS: [&str; 4] = ["Rust", "Go", "TypeScript", "CSS"];
const DATES: [Option<&str>; 5] = [
    None,
    Some("2023-01-01"),
    Some("2024-06-15T08:30:00Z"),
    Some("not a date"),
    Some("2022-12-31 23:59:59"),
];

fn words(max: usize) -> impl Strategy<Value = String> {
    vec(prop::sample::select(WORDS.to_vec()), 0..max).prop_map(|w| w.join(" "))
}

fn arb_project() -> impl Strategy<Value = Project> {
    (
        words(3),
        words(5),
        prop::sample::select(vec!["github", "custom", ""]),
        prop::sample::subsequence(TAGS.to_vec(), 0..=3),
        prop::sample::select(vec![None, Some("c1"), Some("c2")]),
        prop::sample::select(DATES.to_vec()),
        btree_map(prop::sample::select(LANGS.to_vec()), 0u64..1000, 0..3),
    )
        .prop_map(|(title, description, kind, tags, category, date, langs)| Project {
            id: String::new(),
            title,
            description,
            kind: kind.to_string(),
            tags: tags.into_iter().map(str::to_string).collect(),
            project_category_id: category.map(str::to_string),
            created_at: date.map(str::to_string),
            additional_data: AdditionalData {
                languages: langs.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            },
        })
}

fn arb_projects() -> impl Strategy<Value = Vec<Project>> {
    vec(arb_project(), 0..12).prop_map(|mut ps| {
        for (i, p) in ps.iter_mut().enumerate() {
            p.id = format!("p{i}");
        }
        ps
    })
}

fn arb_input() -> impl Strategy<Value = FilterInput> {
    (
        prop::sample::select(vec![
            CategorySelection::All,
            CategorySelection::Uncategorized,
            CategorySelection::Id("c1".into()),
            CategorySelection::Id("c2".into()),
        ]),
        words(3),
        prop::sample::select(vec!["", "github", "custom"]),
        prop::sample::subsequence(TAGS.to_vec(), 0..=2),
        prop::sample::select(vec![SortBy::Date, SortBy::Name]),
        prop::sample::select(vec![SortOrder::Asc, SortOrder::Desc]),
    )
        .prop_map(|(category, search_text, kind, tags, sort_by, sort_order)| FilterInput {
            category,
            search_text,
            selected_type: kind.to_string(),
            selected_tags: tags.into_iter().map(str::to_string).collect(),
            sort_by,
            sort_order,
            ..Default::default()
        })
}

fn ids(visible: &[VisibleProject<'_>]) -> Vec<String> {
    visible.iter().map(|v| v.project.id.clone()).collect()
}

fn in_category(p: &Project, selection: &CategorySelection) -> bool {
    match selection {
        CategorySelection::All => true,
        CategorySelection::Uncategorized => p.project_category_id.is_none(),
        CategorySelection::Id(id) => p.project_category_id.as_deref() == Some(id.as_str()),
    }
}

fn mentions(p: &Project, token: &str) -> bool {
    p.title.to_lowercase().contains(token)
        || p.description.to_lowercase().contains(token)
        || p.tags.iter().any(|t| t.to_lowercase().contains(token))
        || p.additional_data
            .languages
            .keys()
            .any(|l| l.to_lowercase().contains(token))
}

proptest! {
    #[test]
    /// What: Same inputs give the same order and scores
    fn prop_idempotent(projects in arb_projects(), input in arb_input()) {
        let first = compute_visible_projects(&projects, &input);
        let second = compute_visible_projects(&projects, &input);
        prop_assert_eq!(first, second);
    }

    #[test]
    /// What: Every result satisfies every active filter
    fn prop_conjunctive_filters(projects in arb_projects(), input in arb_input()) {
        let tokens: Vec<String> = input
            .search_text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        for v in compute_visible_projects(&projects, &input) {
            let p = v.project;
            prop_assert!(in_category(p, &input.category));
            prop_assert!(input.selected_type.is_empty() || p.kind == input.selected_type);
            prop_assert!(
                input.selected_tags.is_empty()
                    || input.selected_tags.iter().any(|t| p.tags.contains(t))
            );
            prop_assert!(tokens.is_empty() || tokens.iter().any(|t| mentions(p, t)));
            prop_assert_eq!(v.relevance_score.is_some(), !tokens.is_empty());
        }
    }

    #[test]
    /// What: "All" returns everything and a category id returns exactly its members
    fn prop_category_partition(projects in arb_projects()) {
        let all = compute_visible_projects(&projects, &FilterInput::default());
        let all_ids: HashSet<String> = ids(&all).into_iter().collect();
        let every: HashSet<String> = projects.iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(&all_ids, &every);

        for cat in ["c1", "c2"] {
            let input = FilterInput {
                category: CategorySelection::Id(cat.into()),
                ..Default::default()
            };
            let got: HashSet<String> = ids(&compute_visible_projects(&projects, &input))
                .into_iter()
                .collect();
            let expected: HashSet<String> = projects
                .iter()
                .filter(|p| p.project_category_id.as_deref() == Some(cat))
                .map(|p| p.id.clone())
                .collect();
            prop_assert!(got.is_subset(&all_ids));
            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    /// What: Adding search text never adds results
    fn prop_search_is_subset(projects in arb_projects(), input in arb_input()) {
        let without = FilterInput { search_text: String::new(), ..input.clone() };
        let base: HashSet<String> = ids(&compute_visible_projects(&projects, &without))
            .into_iter()
            .collect();
        for id in ids(&compute_visible_projects(&projects, &input)) {
            prop_assert!(base.contains(&id));
        }
    }

    #[test]
    /// What: Exact title match never ranks below a substring title match
    fn prop_exact_title_first(
        token in "[a-z]{3,8}",
        suffix in "[a-z]{1,5}",
        description in words(4),
        tags in prop::sample::subsequence(TAGS.to_vec(), 0..=2),
        b_first in any::<bool>(),
    ) {
        let shared = |id: &str, title: String| Project {
            description: description.clone(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            ..project(id, &title)
        };
        let a = shared("a", token.clone());
        let b = shared("b", format!("{token} {suffix}"));
        let projects = if b_first { vec![b, a] } else { vec![a, b] };
        let input = FilterInput { search_text: token.clone(), ..Default::default() };
        let visible = compute_visible_projects(&projects, &input);
        let pos = |id: &str| visible.iter().position(|v| v.project.id == id);
        let (Some(pa), Some(pb)) = (pos("a"), pos("b")) else {
            return Err(TestCaseError::fail("both projects must match"));
        };
        prop_assert!(visible[pa].relevance_score >= visible[pb].relevance_score);
        prop_assert!(pa < pb);
    }

    #[test]
    /// What: Date descending never puts an earlier date before a later one
    fn prop_date_desc_sorted(projects in arb_projects()) {
        let input = FilterInput {
            sort_by: SortBy::Date,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let visible = compute_visible_projects(&projects, &input);
        let millis = |p: &Project| {
            p.created_at
                .as_deref()
                .and_then(parse_timestamp_millis)
                .unwrap_or(0)
        };
        for pair in visible.windows(2) {
            prop_assert!(millis(pair[0].project) >= millis(pair[1].project));
        }
    }

    #[test]
    /// What: Language percentages stay in range and sum to 100
    fn prop_language_percentages(langs in btree_map("[A-Za-z]{1,8}", 0u64..1_000_000, 1..6)) {
        let shares = language_breakdown(&langs);
        let total: u64 = langs.values().sum();
        if total == 0 {
            prop_assert!(shares.is_empty());
        } else {
            let sum: f64 = shares.iter().map(|s| s.percent).sum();
            prop_assert!((sum - 100.0).abs() < 1e-6);
            prop_assert!(shares.iter().all(|s| (0.0..=100.0).contains(&s.percent)));
            prop_assert!(shares.windows(2).all(|w| w[0].bytes >= w[1].bytes));
        }
    }
}
