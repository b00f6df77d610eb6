//! Line-driven interactive search over stdin.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::app::render::{self, RenderOptions};
use crate::logic::{SearchSession, spawn_search_worker};
use crate::state::{Category, FilterInput, Project, ViewResults};

type Result<T> = super::Result<T>;

/// What: Print `results` when they answer the latest query.
///
/// Inputs:
/// - `out`: Destination
/// - `session`: Query id bookkeeping
/// - `results`: Answer from the search worker
/// - `base`: Controls holding the active category
/// - `options`: Output format and optional sections
///
/// Output:
/// - `Ok(true)` when printed, `Ok(false)` when the results were stale and dropped.
fn print_if_current<W: Write>(
    out: &mut W,
    session: &SearchSession,
    results: &ViewResults,
    base: &FilterInput,
    options: RenderOptions,
) -> Result<bool> {
    if !session.is_current(results) {
        tracing::debug!(id = results.id, latest = session.latest_query_id, "dropping stale results");
        return Ok(false);
    }
    render::write_results(out, results, &base.category, options)?;
    out.flush()?;
    Ok(true)
}

/// What: Run the interactive search loop over an arbitrary line source.
///
/// Inputs:
/// - `lines_in`: Source of search lines
/// - `out`: Destination of rendered results
/// - `projects`, `categories`: Loaded collections
/// - `base`: Controls from the command line; each line replaces the search text
/// - `debounce`: Debounce window of the search worker
/// - `options`: Output format and optional sections
///
/// Output:
/// - `Ok(())` when the source reaches end of input and the last answer was printed.
///
/// # Errors
/// - Returns `Err` on read/write failure or if the worker task panics.
pub async fn run_with<R, W>(
    lines_in: R,
    out: &mut W,
    projects: Vec<Project>,
    categories: Vec<Category>,
    base: FilterInput,
    debounce: Duration,
    options: RenderOptions,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (query_tx, query_rx) = mpsc::unbounded_channel();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();
    let worker = spawn_search_worker(
        query_rx,
        result_tx,
        Arc::from(projects),
        Arc::from(categories),
        debounce,
    );
    let mut session = SearchSession::default();
    session.send_query(base.clone(), &query_tx);

    let mut lines = lines_in.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(text) = line? else { break };
                let input = FilterInput {
                    search_text: text,
                    ..base.clone()
                };
                session.send_query(input, &query_tx);
            }
            Some(results) = result_rx.recv() => {
                print_if_current(out, &session, &results, &base, options)?;
            }
        }
    }

    drop(query_tx);
    while let Some(results) = result_rx.recv().await {
        print_if_current(out, &session, &results, &base, options)?;
    }
    worker.await?;
    Ok(())
}

/// What: Run the interactive search loop on stdin and stdout.
///
/// Inputs:
/// - Same as [`run_with`] without the line source and destination.
///
/// Output:
/// - `Ok(())` when stdin reaches end of input.
///
/// # Errors
/// - Returns `Err` on stdin/stdout failure or if the worker task panics.
pub async fn run(
    projects: Vec<Project>,
    categories: Vec<Category>,
    base: FilterInput,
    debounce: Duration,
    options: RenderOptions,
) -> Result<()> {
    let mut out = std::io::stdout();
    run_with(
        BufReader::new(tokio::io::stdin()),
        &mut out,
        projects,
        categories,
        base,
        debounce,
        options,
    )
    .await
}
