//! Core data types for the VM triage engine
//!
//! Everything downstream of the health-check payload speaks these types:
//! the closed category set, the coarse priority levels, the qualitative
//! impact scale, problem/solution records, and the status-history record.
//! Wire names follow the dashboard's JSON conventions (camelCase fields,
//! SCREAMING_SNAKE_CASE enum values).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Closed enumerations
// ============================================================================

/// Closed category set for detected problems
///
/// Raw category keys from the health-check source are mapped into this set
/// by `category::map_category`; unrecognized keys land on `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemCategory {
    Storage,
    Security,
    Performance,
    Updates,
    Applications,
    Firewall,
    Network,
    System,
}

impl ProblemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemCategory::Storage => "storage",
            ProblemCategory::Security => "security",
            ProblemCategory::Performance => "performance",
            ProblemCategory::Updates => "updates",
            ProblemCategory::Applications => "applications",
            ProblemCategory::Firewall => "firewall",
            ProblemCategory::Network => "network",
            ProblemCategory::System => "system",
        }
    }

    /// Fixed per-category score adjustment used by the priority scorer
    pub fn score_adjustment(&self) -> i64 {
        match self {
            ProblemCategory::Security => 15,
            ProblemCategory::Applications => 12,
            ProblemCategory::Storage => 10,
            ProblemCategory::Performance => 8,
            ProblemCategory::Firewall => 7,
            ProblemCategory::Network => 6,
            ProblemCategory::Updates => 5,
            ProblemCategory::System => 4,
        }
    }

    /// Typical time to fix a problem in this category, in minutes
    pub fn estimated_fix_minutes(&self) -> u32 {
        match self {
            ProblemCategory::Storage => 20,
            ProblemCategory::Security => 30,
            ProblemCategory::Performance => 25,
            ProblemCategory::Updates => 45,
            ProblemCategory::Applications => 15,
            ProblemCategory::Firewall => 10,
            ProblemCategory::Network => 20,
            ProblemCategory::System => 15,
        }
    }
}

impl std::fmt::Display for ProblemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse urgency bucket - the dominant sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityLevel {
    Informational = 1,
    Important = 2,
    Critical = 3,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => "critical",
            PriorityLevel::Important => "important",
            PriorityLevel::Informational => "informational",
        }
    }

    /// Rank for sorting: Critical=3 > Important=2 > Informational=1
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Base weight contributed to the priority score
    pub fn base_weight(&self) -> i64 {
        match self {
            PriorityLevel::Critical => 100,
            PriorityLevel::Important => 50,
            PriorityLevel::Informational => 10,
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative impact scale for business-impact dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactLevel {
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl ImpactLevel {
    /// Weight contributed to the priority score per impact dimension
    pub fn weight(&self) -> i64 {
        match self {
            ImpactLevel::None => 0,
            ImpactLevel::Low => 5,
            ImpactLevel::Medium => 15,
            ImpactLevel::High => 30,
            ImpactLevel::Critical => 50,
        }
    }
}

/// Lifecycle status of a problem
///
/// `Scheduled` is recognized by the data model and by the next-recommended
/// filter, but the transition table in `status` has no edge into it: it is
/// reserved for server-driven scheduling and cannot be entered locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemStatus {
    New,
    InProgress,
    Resolved,
    Dismissed,
    Scheduled,
}

impl ProblemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemStatus::New => "new",
            ProblemStatus::InProgress => "in_progress",
            ProblemStatus::Resolved => "resolved",
            ProblemStatus::Dismissed => "dismissed",
            ProblemStatus::Scheduled => "scheduled",
        }
    }
}

impl std::fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of a remediation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    Manual,
    Automated,
    ExternalLink,
    Verification,
}

/// Difficulty of carrying out a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Moderate,
    Advanced,
}

/// Overall qualitative health label for a VM, derived from summary counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmHealthState {
    Critical,
    Warning,
    Info,
    Healthy,
}

impl std::fmt::Display for VmHealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VmHealthState::Critical => write!(f, "critical"),
            VmHealthState::Warning => write!(f, "warning"),
            VmHealthState::Info => write!(f, "info"),
            VmHealthState::Healthy => write!(f, "healthy"),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// Qualitative business-impact assessment for a problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessImpact {
    /// Plain-language impact summary
    pub description: String,
    pub productivity_impact: ImpactLevel,
    pub security_risk: ImpactLevel,
    pub system_stability_risk: ImpactLevel,
    /// Expected downtime while fixing, if any (human-readable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_downtime: Option<String>,
}

/// One step of a remediation plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionStep {
    /// Sequential id within the solution ("step-1", "step-2", ...)
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: StepKind,
    /// Estimated time for this step, in minutes
    pub estimated_time: u32,
    pub is_completed: bool,
    pub is_optional: bool,
}

/// A canned remediation plan attached to a problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Always the sum of the steps' estimated times
    pub total_estimated_time: u32,
    pub steps: Vec<SolutionStep>,
    pub prerequisites: Vec<String>,
    pub warnings: Vec<String>,
    pub success_criteria: Vec<String>,
}

impl Solution {
    /// Build a solution, deriving `total_estimated_time` from the steps
    ///
    /// This is the only way solutions are constructed, which keeps the
    /// total-equals-sum invariant from drifting.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        steps: Vec<SolutionStep>,
        prerequisites: Vec<String>,
        warnings: Vec<String>,
        success_criteria: Vec<String>,
    ) -> Self {
        let total_estimated_time = steps.iter().map(|s| s.estimated_time).sum();
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            difficulty,
            total_estimated_time,
            steps,
            prerequisites,
            warnings,
            success_criteria,
        }
    }
}

/// A user-facing problem record derived from one raw health-check issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Deterministic id: `{vm_id}-{category}-{issue id or idx-N}`
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: PriorityLevel,
    pub category: ProblemCategory,
    pub status: ProblemStatus,
    pub business_impact: BusinessImpact,
    /// May be empty - not every issue kind has a canned remediation
    pub solutions: Vec<Solution>,
    pub detected_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub vm_id: String,
    pub vm_name: String,
    pub affected_services: Vec<String>,
    pub auto_resolvable: bool,
    pub requires_restart: bool,
    /// Per-category fix-time estimate, in minutes
    pub estimated_fix_time: u32,
}

/// A problem with its computed priority score
///
/// Derived on demand by the scorer; the plain `Problem` stays canonical.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProblem {
    #[serde(flatten)]
    pub problem: Problem,
    pub priority_score: i64,
}

/// One entry of a problem's append-only status history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRecord {
    pub problem_id: String,
    pub from_status: ProblemStatus,
    pub to_status: ProblemStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
