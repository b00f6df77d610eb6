use std::cmp::Ordering;

use crate::state::{Project, RelevanceTieBreak, SortBy, SortOrder, VisibleProject};

/// What: Compare two projects by the selected key, ascending.
///
/// Inputs:
/// - `a`, `b`: Projects to compare
/// - `sort_by`: Date or name
///
/// Output:
/// - Ascending ordering of `a` relative to `b`.
///
/// Details:
/// - Dates compare as epoch milliseconds; missing or unparseable dates count as epoch 0.
/// - Names compare lower-cased.
#[must_use]
pub fn compare_projects(a: &Project, b: &Project, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Date => created_millis(a).cmp(&created_millis(b)),
        SortBy::Name => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}

/// Creation time of `project` in epoch milliseconds, `0` when unknown.
fn created_millis(project: &Project) -> i64 {
    project
        .created_at
        .as_deref()
        .and_then(crate::util::parse_timestamp_millis)
        .unwrap_or(0)
}

/// Apply a direction to an ascending ordering.
const fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// What: Order visible projects by the user's sort controls.
///
/// Inputs:
/// - `items`: Visible projects, modified in place
/// - `sort_by`: Date or name
/// - `order`: Ascending or descending
///
/// Output:
/// - Sorts `items`; equal keys keep their current relative order in both directions.
pub fn sort_visible(items: &mut [VisibleProject<'_>], sort_by: SortBy, order: SortOrder) {
    items.sort_by(|a, b| directed(compare_projects(a.project, b.project, sort_by), order));
}

/// What: Order visible projects by relevance score, highest first.
///
/// Inputs:
/// - `items`: Scored visible projects, modified in place
/// - `tie_break`: Policy for equal scores
/// - `sort_by`, `order`: User sort controls, used only with [`RelevanceTieBreak::UserSort`]
///
/// Output:
/// - Sorts `items` by descending score.
///
/// Details:
/// - With `InputOrder`, equal scores keep the order of the filtering pass.
/// - Missing scores count as zero.
pub fn sort_by_relevance(
    items: &mut [VisibleProject<'_>],
    tie_break: RelevanceTieBreak,
    sort_by: SortBy,
    order: SortOrder,
) {
    items.sort_by(|a, b| {
        let by_score = b
            .relevance_score
            .unwrap_or(0)
            .cmp(&a.relevance_score.unwrap_or(0));
        match tie_break {
            RelevanceTieBreak::InputOrder => by_score,
            RelevanceTieBreak::UserSort => by_score.then_with(|| {
                directed(compare_projects(a.project, b.project, sort_by), order)
            }),
        }
    });
}
