//! Debounced background recomputation of the listing view.
//!
//! The engine itself is synchronous and cheap, but recomputing on every
//! keystroke of a large collection is wasted work. Interactive callers send
//! their controls through [`SearchSession::send_query`]; the worker coalesces
//! bursts within the debounce window and answers only the latest query. Query
//! ids let the caller drop answers that were overtaken by newer input.

use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc,
    task::JoinHandle,
    time::{Duration, sleep},
};

use crate::logic::engine::ProjectView;
use crate::state::{Category, FilterInput, Project, QueryInput, ViewResults};

/// Default debounce window for search input.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Query id bookkeeping on the caller side.
#[derive(Debug, Default, Clone)]
pub struct SearchSession {
    /// Id assigned to the next query.
    pub next_query_id: u64,
    /// Id of the most recently sent query.
    pub latest_query_id: u64,
}

impl SearchSession {
    /// What: Send the current controls to the worker with a fresh id.
    ///
    /// Inputs:
    /// - `input`: Controls to evaluate
    /// - `query_tx`: Channel to the search worker
    ///
    /// Output:
    /// - The id assigned to the query.
    ///
    /// Details:
    /// - Ids start at 1 and increase by one per call; a closed channel is ignored.
    pub fn send_query(
        &mut self,
        input: FilterInput,
        query_tx: &mpsc::UnboundedSender<QueryInput>,
    ) -> u64 {
        self.next_query_id += 1;
        let id = self.next_query_id;
        self.latest_query_id = id;
        let _ = query_tx.send(QueryInput { id, input });
        id
    }

    /// Whether `results` answer the latest query sent.
    #[must_use]
    pub const fn is_current(&self, results: &ViewResults) -> bool {
        results.id == self.latest_query_id
    }
}

/// What: Spawn the background worker that evaluates debounced queries.
///
/// Inputs:
/// - `query_rx`: Channel receiver for queries
/// - `result_tx`: Channel sender for computed views
/// - `projects`, `categories`: Loaded collections, shared read-only
/// - `debounce`: Quiet period required before a query is evaluated
///
/// Output:
/// - Handle of the spawned task; it ends when either channel closes.
///
/// Details:
/// - Queries arriving within the window replace the pending one.
/// - A query pending when the input channel closes is still answered.
pub fn spawn_search_worker(
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    result_tx: mpsc::UnboundedSender<ViewResults>,
    projects: Arc<[Project]>,
    categories: Arc<[Category]>,
    debounce: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = query_rx.recv().await else {
                break;
            };
            loop {
                select! {
                    next = query_rx.recv() => match next {
                        Some(q) => latest = q,
                        None => break,
                    },
                    () = sleep(debounce) => break,
                }
            }
            let view = ProjectView::build(&projects, &categories, &latest.input);
            let items = view
                .visible
                .iter()
                .map(|v| (v.project.clone(), v.relevance_score))
                .collect();
            tracing::debug!(id = latest.id, "search worker answered query");
            if result_tx
                .send(ViewResults {
                    id: latest.id,
                    items,
                    facets: view.facets,
                    tabs: view.tabs,
                })
                .is_err()
            {
                break;
            }
        }
    })
}
