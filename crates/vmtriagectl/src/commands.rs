//! Command implementations for vmtriagectl

use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

use vmtriage_core::{
    build_problems, group_by_priority, next_recommended, overall_state, prioritize,
    requires_immediate_action, summarize, HealthReport, Locale, MemoryHistoryStore,
    PriorityLevel, PrioritySummary, ScoredProblem, TechnicalLevel, TriageConfig, VmHealthState,
    VmIdentity,
};

/// Build the triage config from CLI flags
///
/// Unknown language tags fall back to Spanish (the engine's rule); unknown
/// levels fall back to intermediate.
pub fn parse_config(lang: &str, level: &str) -> TriageConfig {
    let technical_level = match level.trim().to_lowercase().as_str() {
        "basic" => TechnicalLevel::Basic,
        "advanced" => TechnicalLevel::Advanced,
        _ => TechnicalLevel::Intermediate,
    };
    TriageConfig {
        locale: Locale::from_tag(lang),
        technical_level,
    }
}

fn load_report(path: &Path) -> Result<HealthReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read report file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("report file {} is not valid JSON", path.display()))
}

/// Machine-readable triage output (--json)
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TriageOutput {
    vm: VmIdentity,
    state: VmHealthState,
    requires_immediate_action: bool,
    summary: PrioritySummary,
    problems: Vec<ScoredProblem>,
}

/// Run the full pipeline and print the triage report
pub fn triage(
    path: &Path,
    vm_id: &str,
    vm_name: Option<&str>,
    config: &TriageConfig,
    json: bool,
) -> Result<()> {
    let report = load_report(path)?;
    let vm = VmIdentity {
        id: vm_id.to_string(),
        name: vm_name.unwrap_or(vm_id).to_string(),
    };

    let now = Utc::now();
    let problems = build_problems(&report, &vm, config, now);
    let immediate = requires_immediate_action(&problems);
    let sorted = prioritize(&problems, now);
    let summary = summarize(&sorted);
    let state = overall_state(&summary);

    if json {
        let output = TriageOutput {
            vm,
            state,
            requires_immediate_action: immediate,
            summary,
            problems: sorted,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", render_report(&vm, state, immediate, &summary, &sorted));
    Ok(())
}

/// Print the one-line health summary
pub fn summary(
    path: &Path,
    vm_id: &str,
    vm_name: Option<&str>,
    config: &TriageConfig,
) -> Result<()> {
    let report = load_report(path)?;
    let vm = VmIdentity {
        id: vm_id.to_string(),
        name: vm_name.unwrap_or(vm_id).to_string(),
    };

    let now = Utc::now();
    let problems = build_problems(&report, &vm, config, now);
    let sorted = prioritize(&problems, now);
    let summary = summarize(&sorted);
    let state = overall_state(&summary);

    println!(
        "{}: {} ({} critical, {} important, {} informational)",
        vm.name,
        state_label(state),
        summary.critical,
        summary.important,
        summary.informational
    );
    Ok(())
}

fn state_label(state: VmHealthState) -> String {
    match state {
        VmHealthState::Critical => state.to_string().red().bold().to_string(),
        VmHealthState::Warning => state.to_string().yellow().to_string(),
        VmHealthState::Info => state.to_string().blue().to_string(),
        VmHealthState::Healthy => state.to_string().green().to_string(),
    }
}

fn priority_label(level: PriorityLevel) -> String {
    match level {
        PriorityLevel::Critical => "CRITICAL".red().bold().to_string(),
        PriorityLevel::Important => "IMPORTANT".yellow().to_string(),
        PriorityLevel::Informational => "INFORMATIONAL".blue().to_string(),
    }
}

fn render_group(lines: &mut Vec<String>, label: String, group: &[ScoredProblem]) {
    if group.is_empty() {
        return;
    }
    lines.push(label);
    for scored in group {
        lines.push(format!(
            "  [{:>3}] {} ({})",
            scored.priority_score,
            scored.problem.title,
            scored.problem.category.as_str()
        ));
        if let Some(solution) = scored.problem.solutions.first() {
            lines.push(format!(
                "        fix: {} (~{} min)",
                solution.title, solution.total_estimated_time
            ));
        }
    }
    lines.push(String::new());
}

fn render_report(
    vm: &VmIdentity,
    state: VmHealthState,
    immediate: bool,
    summary: &PrioritySummary,
    sorted: &[ScoredProblem],
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Triage Report - {}", vm.name));
    lines.push("=".repeat(60));
    lines.push(format!(
        "State: {} | {} problem(s) | avg score {:.1}",
        state_label(state),
        summary.total,
        summary.average_score
    ));
    if immediate {
        lines.push("Requires immediate action".red().bold().to_string());
    }
    lines.push(String::new());

    let groups = group_by_priority(sorted);
    render_group(&mut lines, priority_label(PriorityLevel::Critical), &groups.critical);
    render_group(&mut lines, priority_label(PriorityLevel::Important), &groups.important);
    render_group(
        &mut lines,
        priority_label(PriorityLevel::Informational),
        &groups.informational,
    );

    // Fresh store: nothing handled yet, so this is the top open problem
    let store = MemoryHistoryStore::new();
    match next_recommended(sorted, &store) {
        Some(next) => lines.push(format!(
            "Next: {} [{}]",
            next.problem.title, next.problem.id
        )),
        None => lines.push("Nothing to do.".to_string()),
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_levels() {
        assert_eq!(
            parse_config("en", "basic").technical_level,
            TechnicalLevel::Basic
        );
        assert_eq!(
            parse_config("en", "ADVANCED").technical_level,
            TechnicalLevel::Advanced
        );
        assert_eq!(
            parse_config("en", "whatever").technical_level,
            TechnicalLevel::Intermediate
        );
    }

    #[test]
    fn test_parse_config_locale_fallback() {
        assert_eq!(parse_config("en-GB", "basic").locale, Locale::En);
        assert_eq!(parse_config("de", "basic").locale, Locale::Es);
    }

    #[test]
    fn test_render_report_lists_problems_and_next() {
        let report: HealthReport = serde_json::from_str(
            r#"{"applications": {"issues": [{"id": "a1", "type": "service_down"}]}}"#,
        )
        .unwrap();
        let vm = VmIdentity {
            id: "vm-1".to_string(),
            name: "app-01".to_string(),
        };
        let now = Utc::now();
        let problems = build_problems(&report, &vm, &parse_config("en", "basic"), now);
        let sorted = prioritize(&problems, now);
        let summary = summarize(&sorted);

        let rendered = render_report(
            &vm,
            overall_state(&summary),
            requires_immediate_action(&problems),
            &summary,
            &sorted,
        );
        assert!(rendered.contains("Triage Report - app-01"));
        assert!(rendered.contains("Service stopped"));
        assert!(rendered.contains("Next: Service stopped [vm-1-applications-a1]"));
    }

    #[test]
    fn test_render_empty_report_has_nothing_to_do() {
        let vm = VmIdentity {
            id: "vm-1".to_string(),
            name: "idle".to_string(),
        };
        let summary = summarize(&[]);
        let rendered = render_report(&vm, overall_state(&summary), false, &summary, &[]);
        assert!(rendered.contains("Nothing to do."));
    }
}
