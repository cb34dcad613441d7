//! Problem assembly
//!
//! Turns one raw health report into normalized `Problem` records by
//! composing the category mapper, priority classifier, impact estimator,
//! solution resolver, and localized text resolution.
//!
//! Problem ids are deterministic: `{vm_id}-{category}-{key}` where `key` is
//! the issue's own id when the source provides one, else `idx-{position}`
//! within that category. Re-running the same report yields the same ids, so
//! repeated transformation passes never mint duplicate identities.

use chrono::{DateTime, Utc};

use crate::category::map_category;
use crate::classify::classify_priority;
use crate::impact::estimate_impact;
use crate::locale::TriageConfig;
use crate::report::{HealthReport, RawIssue, VmIdentity};
use crate::solutions::resolve_solutions;
use crate::text::{resolve_description, resolve_title};
use crate::types::{Problem, ProblemStatus};

/// Issue kinds the platform can fix without operator involvement
const AUTO_RESOLVABLE_KINDS: &[&str] = &[
    "updates_available",
    "temp_files",
    "cache_full",
    "service_down",
];

/// Issue kinds whose fix requires a VM restart
const REQUIRES_RESTART_KINDS: &[&str] = &["kernel_update", "driver_update", "memory_leak"];

fn kind_in(issue: &RawIssue, set: &[&str]) -> bool {
    issue
        .kind
        .as_deref()
        .map(|kind| set.contains(&kind))
        .unwrap_or(false)
}

/// Build the problem list for one VM's health report
///
/// `now` is the transformation time; it becomes `last_updated` on every
/// problem and the `detected_at` fallback for issues without a usable
/// timestamp.
pub fn build_problems(
    report: &HealthReport,
    vm: &VmIdentity,
    config: &TriageConfig,
    now: DateTime<Utc>,
) -> Vec<Problem> {
    let mut problems = Vec::with_capacity(report.issue_count());

    for (raw_key, findings) in &report.categories {
        let category = map_category(raw_key);

        for (index, issue) in findings.issues.iter().enumerate() {
            let key = issue
                .id
                .clone()
                .unwrap_or_else(|| format!("idx-{}", index));
            let id = format!("{}-{}-{}", vm.id, category.as_str(), key);

            let priority = classify_priority(category, issue);
            let title = resolve_title(category, issue, config.locale);
            let description = resolve_description(category, issue, &vm.name, config);
            let business_impact = estimate_impact(category, config.locale);
            let solutions = resolve_solutions(category, issue, &id, &title, config.locale);

            tracing::debug!(
                problem_id = %id,
                priority = %priority,
                solutions = solutions.len(),
                "built problem"
            );

            problems.push(Problem {
                id,
                title,
                description,
                priority,
                category,
                status: ProblemStatus::New,
                business_impact,
                solutions,
                detected_at: issue.detected_at_or(now),
                last_updated: now,
                vm_id: vm.id.clone(),
                vm_name: vm.name.clone(),
                affected_services: issue.affected_services.clone(),
                auto_resolvable: kind_in(issue, AUTO_RESOLVABLE_KINDS),
                requires_restart: kind_in(issue, REQUIRES_RESTART_KINDS),
                estimated_fix_time: category.estimated_fix_minutes(),
            });
        }
    }

    tracing::info!(vm = %vm.id, problems = problems.len(), "health report transformed");
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::types::{PriorityLevel, ProblemCategory};

    fn vm() -> VmIdentity {
        VmIdentity {
            id: "vm-42".to_string(),
            name: "web-01".to_string(),
        }
    }

    fn report_json(json: &str) -> HealthReport {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_ids_are_deterministic_across_runs() {
        let report = report_json(
            r#"{"storage": {"issues": [
                {"id": "disk-1", "type": "disk_full", "severity": "high"},
                {"type": "disk_full"}
            ]}}"#,
        );
        let now = Utc::now();
        let config = TriageConfig::default();

        let first = build_problems(&report, &vm(), &config, now);
        let second = build_problems(&report, &vm(), &config, now);

        assert_eq!(first[0].id, "vm-42-storage-disk-1");
        assert_eq!(first[1].id, "vm-42-storage-idx-1");
        let first_ids: Vec<_> = first.iter().map(|p| p.id.clone()).collect();
        let second_ids: Vec<_> = second.iter().map(|p| p.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_unknown_category_becomes_system() {
        let report = report_json(r#"{"hypervisor": {"issues": [{"type": "weird"}]}}"#);
        let problems = build_problems(&report, &vm(), &TriageConfig::default(), Utc::now());
        assert_eq!(problems[0].category, ProblemCategory::System);
        assert_eq!(problems[0].id, "vm-42-system-idx-0");
    }

    #[test]
    fn test_new_problems_start_in_new_status() {
        let report = report_json(r#"{"updates": {"issues": [{"type": "updates_available"}]}}"#);
        let problems = build_problems(&report, &vm(), &TriageConfig::default(), Utc::now());
        assert_eq!(problems[0].status, ProblemStatus::New);
        assert_eq!(problems[0].priority, PriorityLevel::Important);
    }

    #[test]
    fn test_detected_at_preserved_from_source() {
        let report = report_json(
            r#"{"storage": {"issues": [
                {"type": "disk_full", "detectedAt": "2026-01-05T12:00:00Z"},
                {"type": "disk_full"}
            ]}}"#,
        );
        let now = Utc::now();
        let problems = build_problems(&report, &vm(), &TriageConfig::default(), now);
        assert_eq!(
            problems[0].detected_at.to_rfc3339(),
            "2026-01-05T12:00:00+00:00"
        );
        assert_eq!(problems[1].detected_at, now);
        assert_eq!(problems[0].last_updated, now);
    }

    #[test]
    fn test_auto_resolvable_and_restart_flags() {
        let report = report_json(
            r#"{
                "updates": {"issues": [{"type": "updates_available"}]},
                "system": {"issues": [{"type": "kernel_update"}, {"type": "other"}]}
            }"#,
        );
        let problems = build_problems(&report, &vm(), &TriageConfig::default(), Utc::now());
        let updates = problems.iter().find(|p| p.id.contains("updates")).unwrap();
        assert!(updates.auto_resolvable);
        assert!(!updates.requires_restart);

        let kernel = problems
            .iter()
            .find(|p| p.id == "vm-42-system-idx-0")
            .unwrap();
        assert!(kernel.requires_restart);

        let other = problems
            .iter()
            .find(|p| p.id == "vm-42-system-idx-1")
            .unwrap();
        assert!(!other.auto_resolvable);
        assert!(!other.requires_restart);
    }

    #[test]
    fn test_fix_time_from_category_table() {
        let report = report_json(r#"{"firewall": {"issues": [{}]}}"#);
        let problems = build_problems(&report, &vm(), &TriageConfig::default(), Utc::now());
        assert_eq!(
            problems[0].estimated_fix_time,
            ProblemCategory::Firewall.estimated_fix_minutes()
        );
    }

    #[test]
    fn test_localized_texts_follow_config() {
        let report = report_json(r#"{"applications": {"issues": [{"type": "service_down"}]}}"#);
        let es = build_problems(&report, &vm(), &TriageConfig::default(), Utc::now());
        let en_config = TriageConfig {
            locale: Locale::En,
            ..Default::default()
        };
        let en = build_problems(&report, &vm(), &en_config, Utc::now());
        assert_eq!(es[0].title, "Servicio detenido");
        assert_eq!(en[0].title, "Service stopped");
    }

    #[test]
    fn test_empty_report_builds_no_problems() {
        let report = report_json("{}");
        let problems = build_problems(&report, &vm(), &TriageConfig::default(), Utc::now());
        assert!(problems.is_empty());
    }
}
