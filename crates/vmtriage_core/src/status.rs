//! Problem status lifecycle
//!
//! A validated finite state machine over `ProblemStatus`, backed by an
//! append-only history log behind the `HistoryStore` interface. Current
//! status is never stored separately: it is derived from the last history
//! record, or `New` when no history exists.
//!
//! The history is the client-side source of truth until a server round-trip
//! confirms a status. Records are only appended, never edited or removed.
//! Callers must serialize updates per problem id: two concurrent updates
//! for the same id could both validate against a stale current status. The
//! store does not solve that internally.

use chrono::Utc;
use std::collections::HashMap;

use crate::types::{ProblemStatus, StatusChangeRecord};

/// Legal target statuses for a given current status
///
/// `Scheduled` is reserved in the data model but has no row here: nothing
/// transitions into or out of it through this table.
pub fn allowed_transitions(from: ProblemStatus) -> &'static [ProblemStatus] {
    match from {
        ProblemStatus::New => &[ProblemStatus::InProgress, ProblemStatus::Dismissed],
        ProblemStatus::InProgress => &[
            ProblemStatus::Resolved,
            ProblemStatus::Dismissed,
            ProblemStatus::New,
        ],
        ProblemStatus::Resolved => &[ProblemStatus::InProgress],
        ProblemStatus::Dismissed => &[ProblemStatus::InProgress, ProblemStatus::New],
        ProblemStatus::Scheduled => &[],
    }
}

/// Derive the current status from a problem's history
///
/// Pure and total: empty history means `New`.
pub fn current_status(history: &[StatusChangeRecord]) -> ProblemStatus {
    history
        .last()
        .map(|record| record.to_status)
        .unwrap_or(ProblemStatus::New)
}

/// Rejected status change
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("invalid status transition for {problem_id}: {from} -> {to}")]
    InvalidTransition {
        problem_id: String,
        from: ProblemStatus,
        to: ProblemStatus,
    },
}

/// Append-only, per-problem ordered history storage
pub trait HistoryStore {
    /// All records for a problem, oldest first
    fn history(&self, problem_id: &str) -> &[StatusChangeRecord];

    /// Append one record to a problem's history
    fn append(&mut self, record: StatusChangeRecord);

    /// Current status of a problem, derived from its history
    fn status_of(&self, problem_id: &str) -> ProblemStatus {
        current_status(self.history(problem_id))
    }
}

/// In-memory history store
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    histories: HashMap<String, Vec<StatusChangeRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn history(&self, problem_id: &str) -> &[StatusChangeRecord] {
        self.histories
            .get(problem_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn append(&mut self, record: StatusChangeRecord) {
        self.histories
            .entry(record.problem_id.clone())
            .or_default()
            .push(record);
    }
}

/// Apply one validated status change
///
/// Validates `new_status` against the transition table for the problem's
/// derived current status. On success, appends a record and returns it; on
/// failure, returns `InvalidTransition` carrying the rejected from/to pair
/// so the caller can explain the rejection.
pub fn update_status(
    store: &mut dyn HistoryStore,
    problem_id: &str,
    new_status: ProblemStatus,
    notes: Option<String>,
    user_id: Option<String>,
) -> Result<StatusChangeRecord, TransitionError> {
    let from = store.status_of(problem_id);

    if !allowed_transitions(from).contains(&new_status) {
        tracing::warn!(problem_id, %from, to = %new_status, "status transition rejected");
        return Err(TransitionError::InvalidTransition {
            problem_id: problem_id.to_string(),
            from,
            to: new_status,
        });
    }

    let record = StatusChangeRecord {
        problem_id: problem_id.to_string(),
        from_status: from,
        to_status: new_status,
        timestamp: Utc::now(),
        notes,
        user_id,
    };
    store.append(record.clone());
    tracing::debug!(problem_id, %from, to = %new_status, "status transition applied");
    Ok(record)
}

/// Outcome of a bulk status update
#[derive(Debug, Default)]
pub struct BulkStatusOutcome {
    pub success_count: usize,
    pub error_count: usize,
    /// Records appended for the ids that succeeded, in application order
    pub applied: Vec<StatusChangeRecord>,
    /// Rejections keyed by problem id
    pub errors: HashMap<String, TransitionError>,
}

/// Apply the same status change to several problems
///
/// Ids are processed sequentially, in the given order, so the history log
/// stays unambiguous under partial failure. One id's rejection does not
/// stop the rest.
pub fn bulk_update_status(
    store: &mut dyn HistoryStore,
    problem_ids: &[String],
    new_status: ProblemStatus,
    user_id: Option<String>,
) -> BulkStatusOutcome {
    let mut outcome = BulkStatusOutcome::default();

    for problem_id in problem_ids {
        match update_status(store, problem_id, new_status, None, user_id.clone()) {
            Ok(record) => {
                outcome.success_count += 1;
                outcome.applied.push(record);
            }
            Err(err) => {
                outcome.error_count += 1;
                outcome.errors.insert(problem_id.clone(), err);
            }
        }
    }

    tracing::info!(
        requested = problem_ids.len(),
        succeeded = outcome.success_count,
        failed = outcome.error_count,
        to = %new_status,
        "bulk status update"
    );
    outcome
}
