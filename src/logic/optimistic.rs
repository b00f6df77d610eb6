//! Optimistic local updates that roll back when the remote write fails.
//!
//! Editing screens apply a change to their local state immediately, send the
//! request, and restore the captured snapshot if the request fails. The outcome is
//! reported through a [`Notifier`], the toast sink of the front-end.

use std::fmt::Display;
use std::future::Future;
use std::sync::Mutex;

/// Sink for user-facing notifications.
pub trait Notifier {
    /// Report a successful operation.
    fn success(&self, message: &str);
    /// Report a failed operation.
    fn error(&self, message: &str);
}

/// Notifier that forwards to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notice = message, "operation succeeded");
    }

    fn error(&self, message: &str) {
        tracing::warn!(notice = message, "operation failed");
    }
}

/// Kind of a recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// From [`Notifier::success`].
    Success,
    /// From [`Notifier::error`].
    Error,
}

/// Notifier that keeps every message, for tests and headless callers.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    /// Recorded notifications in arrival order.
    notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
    /// Snapshot of the notifications recorded so far.
    #[must_use]
    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Append one notification; a poisoned lock drops it.
    fn push(&self, kind: NoticeKind, message: &str) {
        if let Ok(mut n) = self.notices.lock() {
            n.push((kind, message.to_string()));
        }
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(NoticeKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeKind::Error, message);
    }
}

/// What: Apply a local change immediately and undo it if the remote write fails.
///
/// Inputs:
/// - `state`: Local state, updated in place
/// - `label`: Human-readable operation name used in notifications
/// - `update`: Local mutation to apply before the request
/// - `request`: Remote write, receiving a copy of the updated state
/// - `notifier`: Toast sink
///
/// Output:
/// - `Ok(value)` from the request, with the updated state kept.
/// - `Err(e)` from the request, with `state` restored to the snapshot taken before `update`.
///
/// # Errors
/// - Returns the request's error unchanged after rolling back.
pub async fn apply_optimistic<T, R, E, U, F, Fut>(
    state: &mut T,
    label: &str,
    update: U,
    request: F,
    notifier: &dyn Notifier,
) -> Result<R, E>
where
    T: Clone,
    E: Display,
    U: FnOnce(&mut T),
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let snapshot = state.clone();
    update(state);
    match request(state.clone()).await {
        Ok(value) => {
            notifier.success(&format!("{label}: saved"));
            Ok(value)
        }
        Err(e) => {
            *state = snapshot;
            tracing::debug!(label, error = %e, "rolled back optimistic update");
            notifier.error(&format!("{label}: {e}"));
            Err(e)
        }
    }
}
