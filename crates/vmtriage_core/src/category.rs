//! Raw category key mapping
//!
//! Health-check sources report free-form category keys. Everything funnels
//! into the closed `ProblemCategory` set here; an unrecognized key maps to
//! `System` so unknown values never leak into the rest of the pipeline.

use crate::types::ProblemCategory;

/// Map a raw category key to the closed category set
///
/// Case-insensitive on the known keys. Total: never fails, unknown keys
/// become `System`.
pub fn map_category(raw: &str) -> ProblemCategory {
    match raw.trim().to_lowercase().as_str() {
        "storage" => ProblemCategory::Storage,
        "security" => ProblemCategory::Security,
        "performance" => ProblemCategory::Performance,
        "updates" => ProblemCategory::Updates,
        "applications" => ProblemCategory::Applications,
        "firewall" => ProblemCategory::Firewall,
        "network" => ProblemCategory::Network,
        "system" => ProblemCategory::System,
        _ => ProblemCategory::System,
    }
}
