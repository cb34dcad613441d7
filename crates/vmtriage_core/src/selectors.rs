//! Read-only views over scored problems
//!
//! Composition layer for consumers: level filtering, the "what should I do
//! next" query, and the overall qualitative health label for a VM. No
//! mutation happens here.

use crate::scoring::PrioritySummary;
use crate::status::HistoryStore;
use crate::types::{PriorityLevel, ProblemStatus, ScoredProblem, VmHealthState};

/// Keep only problems whose level is in the given set
pub fn filter_by_levels(
    sorted: &[ScoredProblem],
    levels: &[PriorityLevel],
) -> Vec<ScoredProblem> {
    sorted
        .iter()
        .filter(|scored| levels.contains(&scored.problem.priority))
        .cloned()
        .collect()
}

/// The next problem an operator should look at
///
/// First problem in sorted order whose current status (from the history
/// store) is `New` or `Scheduled`. Problems being worked on, resolved, or
/// dismissed are skipped.
pub fn next_recommended<'a>(
    sorted: &'a [ScoredProblem],
    store: &dyn HistoryStore,
) -> Option<&'a ScoredProblem> {
    sorted.iter().find(|scored| {
        matches!(
            store.status_of(&scored.problem.id),
            ProblemStatus::New | ProblemStatus::Scheduled
        )
    })
}

/// Overall qualitative health label, from summary counts alone
///
/// Fixed precedence: any Critical wins, else any Important, else any
/// Informational, else healthy.
pub fn overall_state(summary: &PrioritySummary) -> VmHealthState {
    if summary.critical > 0 {
        VmHealthState::Critical
    } else if summary.important > 0 {
        VmHealthState::Warning
    } else if summary.informational > 0 {
        VmHealthState::Info
    } else {
        VmHealthState::Healthy
    }
}
