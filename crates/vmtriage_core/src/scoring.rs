//! Priority scoring and ordering
//!
//! The score is a fixed weighted sum; the sort is two-level. Priority level
//! always dominates: a low-scoring Critical problem outranks a high-scoring
//! Important one. Within equal (level, score) pairs input order is
//! preserved (`sort_by` is stable), so repeated runs produce identical
//! orderings.

use chrono::{DateTime, Duration, Utc};

use crate::types::{ImpactLevel, PriorityLevel, Problem, ScoredProblem};

/// Compute the priority score for one problem
///
/// Weighted factors, in order: base weight per priority level, the three
/// business-impact dimensions summed independently, +5 when detected within
/// the last hour of `now`, the fixed per-category adjustment, +3 when
/// auto-resolvable, -5 when a restart is required, +2 per affected service.
/// The result is clamped to zero, never negative.
pub fn score_problem(problem: &Problem, now: DateTime<Utc>) -> i64 {
    let mut score = problem.priority.base_weight();

    score += problem.business_impact.productivity_impact.weight();
    score += problem.business_impact.security_risk.weight();
    score += problem.business_impact.system_stability_risk.weight();

    if now.signed_duration_since(problem.detected_at) <= Duration::hours(1) {
        score += 5;
    }

    score += problem.category.score_adjustment();

    if problem.auto_resolvable {
        score += 3;
    }
    if problem.requires_restart {
        score -= 5;
    }
    score += 2 * problem.affected_services.len() as i64;

    score.max(0)
}

/// Score and sort problems: level rank descending, then score descending
pub fn prioritize(problems: &[Problem], now: DateTime<Utc>) -> Vec<ScoredProblem> {
    let mut scored: Vec<ScoredProblem> = problems
        .iter()
        .map(|problem| ScoredProblem {
            priority_score: score_problem(problem, now),
            problem: problem.clone(),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.problem
            .priority
            .rank()
            .cmp(&a.problem.priority.rank())
            .then(b.priority_score.cmp(&a.priority_score))
    });

    scored
}

/// Sorted problems grouped by priority level
///
/// Each group keeps the overall sort order, which is the same rule applied
/// within the group.
#[derive(Debug, Clone, Default)]
pub struct PriorityGroups {
    pub critical: Vec<ScoredProblem>,
    pub important: Vec<ScoredProblem>,
    pub informational: Vec<ScoredProblem>,
}

pub fn group_by_priority(sorted: &[ScoredProblem]) -> PriorityGroups {
    let mut groups = PriorityGroups::default();
    for scored in sorted {
        match scored.problem.priority {
            PriorityLevel::Critical => groups.critical.push(scored.clone()),
            PriorityLevel::Important => groups.important.push(scored.clone()),
            PriorityLevel::Informational => groups.informational.push(scored.clone()),
        }
    }
    groups
}

/// Summary statistics over a scored problem list
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritySummary {
    pub total: usize,
    pub critical: usize,
    pub important: usize,
    pub informational: usize,
    pub average_score: f64,
    /// The single highest-scoring problem, if any (first one on ties)
    pub top_problem: Option<ScoredProblem>,
}

pub fn summarize(scored: &[ScoredProblem]) -> PrioritySummary {
    let mut summary = PrioritySummary {
        total: scored.len(),
        ..Default::default()
    };

    let mut score_sum: i64 = 0;
    for item in scored {
        match item.problem.priority {
            PriorityLevel::Critical => summary.critical += 1,
            PriorityLevel::Important => summary.important += 1,
            PriorityLevel::Informational => summary.informational += 1,
        }
        score_sum += item.priority_score;
        let beats_current = summary
            .top_problem
            .as_ref()
            .map(|top| item.priority_score > top.priority_score)
            .unwrap_or(true);
        if beats_current {
            summary.top_problem = Some(item.clone());
        }
    }

    if !scored.is_empty() {
        summary.average_score = score_sum as f64 / scored.len() as f64;
    }

    summary
}

/// Whether the list demands immediate operator attention
///
/// True iff any Critical problem also carries a Critical security or
/// system-stability risk.
pub fn requires_immediate_action(problems: &[Problem]) -> bool {
    problems.iter().any(|problem| {
        problem.priority == PriorityLevel::Critical
            && (problem.business_impact.security_risk == ImpactLevel::Critical
                || problem.business_impact.system_stability_risk == ImpactLevel::Critical)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BusinessImpact, ProblemCategory, ProblemStatus};

    fn base_problem(id: &str, priority: PriorityLevel, category: ProblemCategory) -> Problem {
        let old = Utc::now() - Duration::days(2);
        Problem {
            id: id.to_string(),
            title: "test".to_string(),
            description: "test".to_string(),
            priority,
            category,
            status: ProblemStatus::New,
            business_impact: BusinessImpact {
                description: "test".to_string(),
                productivity_impact: ImpactLevel::None,
                security_risk: ImpactLevel::None,
                system_stability_risk: ImpactLevel::None,
                estimated_downtime: None,
            },
            solutions: vec![],
            detected_at: old,
            last_updated: old,
            vm_id: "vm-1".to_string(),
            vm_name: "test-vm".to_string(),
            affected_services: vec![],
            auto_resolvable: false,
            requires_restart: false,
            estimated_fix_time: 10,
        }
    }

    #[test]
    fn test_score_base_weight_and_category_adjustment() {
        let now = Utc::now();
        let p = base_problem("a", PriorityLevel::Informational, ProblemCategory::System);
        // 10 base + 4 category, nothing else
        assert_eq!(score_problem(&p, now), 14);

        let p = base_problem("b", PriorityLevel::Critical, ProblemCategory::Security);
        assert_eq!(score_problem(&p, now), 115);
    }

    #[test]
    fn test_score_impact_dimensions_are_summed() {
        let now = Utc::now();
        let mut p = base_problem("a", PriorityLevel::Important, ProblemCategory::Storage);
        p.business_impact.productivity_impact = ImpactLevel::High;
        p.business_impact.security_risk = ImpactLevel::Low;
        p.business_impact.system_stability_risk = ImpactLevel::Critical;
        // 50 base + 30 + 5 + 50 impact + 10 category
        assert_eq!(score_problem(&p, now), 145);
    }

    #[test]
    fn test_score_recency_bonus() {
        let now = Utc::now();
        let mut p = base_problem("a", PriorityLevel::Informational, ProblemCategory::System);
        p.detected_at = now - Duration::minutes(30);
        assert_eq!(score_problem(&p, now), 19); // 10 + 4 + 5

        p.detected_at = now - Duration::hours(3);
        assert_eq!(score_problem(&p, now), 14);
    }

    #[test]
    fn test_score_flags_and_services() {
        let now = Utc::now();
        let mut p = base_problem("a", PriorityLevel::Informational, ProblemCategory::System);
        p.auto_resolvable = true;
        p.requires_restart = true;
        p.affected_services = vec!["nginx".to_string(), "mysql".to_string()];
        // 10 + 4 + 3 - 5 + 4
        assert_eq!(score_problem(&p, now), 16);
    }

    #[test]
    fn test_score_never_negative() {
        let now = Utc::now();
        let mut p = base_problem("a", PriorityLevel::Informational, ProblemCategory::System);
        p.requires_restart = true;
        p.detected_at = now - Duration::days(30);
        assert!(score_problem(&p, now) >= 0);
    }

    #[test]
    fn test_priority_level_dominates_raw_score() {
        let now = Utc::now();
        // Critical with minimal score factors
        let low_critical = base_problem("crit", PriorityLevel::Critical, ProblemCategory::System);
        // Important loaded with every bonus
        let mut high_important =
            base_problem("imp", PriorityLevel::Important, ProblemCategory::Security);
        high_important.business_impact.productivity_impact = ImpactLevel::Critical;
        high_important.business_impact.security_risk = ImpactLevel::Critical;
        high_important.business_impact.system_stability_risk = ImpactLevel::Critical;
        high_important.affected_services = vec!["a".to_string(); 10];
        high_important.detected_at = now;

        let sorted = prioritize(&[high_important.clone(), low_critical.clone()], now);
        assert!(
            score_problem(&high_important, now) > score_problem(&low_critical, now)
        );
        assert_eq!(sorted[0].problem.id, "crit");
    }

    #[test]
    fn test_sort_is_stable_within_equal_level_and_score() {
        let now = Utc::now();
        let a = base_problem("first", PriorityLevel::Informational, ProblemCategory::System);
        let b = base_problem("second", PriorityLevel::Informational, ProblemCategory::System);
        let c = base_problem("third", PriorityLevel::Informational, ProblemCategory::System);

        let sorted = prioritize(&[a, b, c], now);
        let ids: Vec<_> = sorted.iter().map(|s| s.problem.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_grouping_preserves_sorted_order() {
        let now = Utc::now();
        let mut high = base_problem("high", PriorityLevel::Important, ProblemCategory::Security);
        high.business_impact.security_risk = ImpactLevel::High;
        let low = base_problem("low", PriorityLevel::Important, ProblemCategory::System);
        let crit = base_problem("crit", PriorityLevel::Critical, ProblemCategory::System);

        let sorted = prioritize(&[low, high, crit], now);
        let groups = group_by_priority(&sorted);
        assert_eq!(groups.critical.len(), 1);
        assert_eq!(groups.important.len(), 2);
        assert_eq!(groups.important[0].problem.id, "high");
        assert_eq!(groups.important[1].problem.id, "low");
        assert!(groups.informational.is_empty());
    }

    #[test]
    fn test_summary_counts_and_top() {
        let now = Utc::now();
        let crit = base_problem("crit", PriorityLevel::Critical, ProblemCategory::Security);
        let info = base_problem("info", PriorityLevel::Informational, ProblemCategory::System);

        let sorted = prioritize(&[crit, info], now);
        let summary = summarize(&sorted);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.important, 0);
        assert_eq!(summary.informational, 1);
        assert_eq!(summary.top_problem.as_ref().unwrap().problem.id, "crit");
        let expected_avg = (115.0 + 14.0) / 2.0;
        assert!((summary.average_score - expected_avg).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_of_empty_list() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.critical, 0);
        assert_eq!(summary.important, 0);
        assert_eq!(summary.informational, 0);
        assert_eq!(summary.average_score, 0.0);
        assert!(summary.top_problem.is_none());
    }

    #[test]
    fn test_requires_immediate_action() {
        let mut crit = base_problem("crit", PriorityLevel::Critical, ProblemCategory::Security);
        crit.business_impact.security_risk = ImpactLevel::Critical;
        assert!(requires_immediate_action(&[crit.clone()]));

        // Critical problem without critical risk dimensions does not trigger
        let calm_crit = base_problem("calm", PriorityLevel::Critical, ProblemCategory::System);
        assert!(!requires_immediate_action(&[calm_crit]));

        // Important problems never trigger, whatever their impact
        let mut imp = base_problem("imp", PriorityLevel::Important, ProblemCategory::Storage);
        imp.business_impact.system_stability_risk = ImpactLevel::Critical;
        assert!(!requires_immediate_action(&[imp]));
    }
}
