//! VM Triage Core - health-check issues turned into prioritized problems
//!
//! Pipeline: raw health report -> category mapping -> problem assembly
//! (classification, business impact, canned solutions, localized text) ->
//! scoring and ordering -> grouped/summarized views. Independently, each
//! problem's lifecycle status moves through a validated state machine
//! backed by an append-only history log.
//!
//! Everything is synchronous and pure-function dominated; the only mutable
//! state is the status history behind the `HistoryStore` interface.

pub mod builder;
pub mod category;
pub mod classify;
pub mod impact;
pub mod locale;
pub mod report;
pub mod scoring;
pub mod selectors;
pub mod solutions;
pub mod status;
pub mod text;
pub mod types;

pub use builder::build_problems;
pub use category::map_category;
pub use classify::classify_priority;
pub use impact::estimate_impact;
pub use locale::{Locale, TechnicalLevel, TriageConfig};
pub use report::{CategoryFindings, HealthReport, RawIssue, VmIdentity};
pub use scoring::{
    group_by_priority, prioritize, requires_immediate_action, score_problem, summarize,
    PriorityGroups, PrioritySummary,
};
pub use selectors::{filter_by_levels, next_recommended, overall_state};
pub use solutions::resolve_solutions;
pub use status::{
    allowed_transitions, bulk_update_status, current_status, update_status, BulkStatusOutcome,
    HistoryStore, MemoryHistoryStore, TransitionError,
};
pub use types::{
    BusinessImpact, Difficulty, ImpactLevel, PriorityLevel, Problem, ProblemCategory,
    ProblemStatus, ScoredProblem, Solution, SolutionStep, StatusChangeRecord, StepKind,
    VmHealthState,
};
