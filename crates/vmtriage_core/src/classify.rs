//! Priority classification rules
//!
//! Fixed-order decision rules mapping (category, issue) to a priority
//! level. First match wins, and the per-category conditions run before the
//! unconditional fallthroughs: a storage issue with severity "critical"
//! classifies Critical even though storage alone never does.

use crate::report::RawIssue;
use crate::types::{PriorityLevel, ProblemCategory};

/// Classify an issue into a priority level
///
/// Total: every (category, issue) pair maps to exactly one level.
pub fn classify_priority(category: ProblemCategory, issue: &RawIssue) -> PriorityLevel {
    let severity = issue.severity.as_deref().unwrap_or("");
    let kind = issue.kind.as_deref().unwrap_or("");

    // Rule 1: Critical
    if category == ProblemCategory::Security
        || (category == ProblemCategory::Storage && severity == "critical")
        || (category == ProblemCategory::Applications && kind == "service_down")
    {
        tracing::debug!(category = %category, severity, kind, "classified critical");
        return PriorityLevel::Critical;
    }

    // Rule 2: Important
    if category == ProblemCategory::Updates
        || category == ProblemCategory::Performance
        || (category == ProblemCategory::Storage && severity == "high")
    {
        return PriorityLevel::Important;
    }

    // Rule 3: everything else
    PriorityLevel::Informational
}
