//! Inbound health-check payload model
//!
//! The health-check source hands us a mapping from raw category name to a
//! container of issue records. Everything in an issue is optional and the
//! parse is tolerant: unknown fields are ignored, malformed timestamps fall
//! back to "now" instead of failing the whole report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identity of the VM a health report belongs to (owned elsewhere)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmIdentity {
    pub id: String,
    pub name: String,
}

/// One raw issue as reported by the health-check source
///
/// All fields are optional; the builder substitutes documented defaults for
/// anything missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssue {
    /// Source-assigned issue id, when the source has one
    #[serde(default)]
    pub id: Option<String>,
    /// Issue kind, e.g. "disk_full", "service_down" ("type" on the wire)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Source severity, e.g. "critical", "high", "medium", "low"
    #[serde(default)]
    pub severity: Option<String>,
    /// Technical detail text from the source
    #[serde(default)]
    pub description: Option<String>,
    /// RFC 3339 detection timestamp; kept as a string so a malformed value
    /// degrades to "now" instead of rejecting the report
    #[serde(default)]
    pub detected_at: Option<String>,
    #[serde(default)]
    pub affected_services: Vec<String>,
}

impl RawIssue {
    /// Detection time, falling back to `now` when missing or malformed
    pub fn detected_at_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.detected_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(now)
    }
}

/// Issues reported under one raw category key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryFindings {
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

/// Full health-check payload for one VM
///
/// Categories are kept in a `BTreeMap` so iteration order (and therefore
/// fallback index-based problem ids) is stable across runs of the same
/// report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(flatten)]
    pub categories: BTreeMap<String, CategoryFindings>,
}

impl HealthReport {
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|c| c.issues.is_empty())
    }

    pub fn issue_count(&self) -> usize {
        self.categories.values().map(|c| c.issues.len()).sum()
    }
}
