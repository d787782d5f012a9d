use std::collections::{BTreeSet, HashMap};

use super::super::domain::{Employee, EmployeeId, GapSeverity, Project, SkillGap};
use super::config::AnalyticsConfig;

pub(crate) fn gap_for_project(
    project: &Project,
    roster: &HashMap<&EmployeeId, &Employee>,
    config: &AnalyticsConfig,
) -> SkillGap {
    // Stale or unknown team-member ids resolve to nothing and simply
    // contribute no skills.
    let assigned: Vec<&Employee> = project
        .team_members
        .iter()
        .filter_map(|id| roster.get(id).copied())
        .collect();

    let mut available_skills = BTreeSet::new();
    for employee in &assigned {
        available_skills.extend(employee.skills.iter().cloned());
    }

    let missing_skills: BTreeSet<String> = project
        .required_skills
        .difference(&available_skills)
        .cloned()
        .collect();

    let severity = classify_severity(
        missing_skills.len(),
        project.required_skills.len(),
        config,
    );

    let employees_with_skills = assigned
        .iter()
        .filter(|employee| {
            employee
                .skills
                .intersection(&project.required_skills)
                .next()
                .is_some()
        })
        .count();

    SkillGap {
        project_id: project.id.clone(),
        project_name: project.name.clone(),
        required_skills: project.required_skills.clone(),
        available_skills,
        missing_skills,
        severity,
        employees_with_skills,
        total_employees_needed: project.team_members.len().max(1),
    }
}

pub(crate) fn classify_severity(
    missing: usize,
    required: usize,
    config: &AnalyticsConfig,
) -> GapSeverity {
    // A project with no stated requirements has no gap.
    if required == 0 {
        return GapSeverity::Low;
    }

    let missing_fraction = missing as f32 / required as f32;
    if missing_fraction > config.high_missing_fraction {
        GapSeverity::High
    } else if missing_fraction > config.medium_missing_fraction {
        GapSeverity::Medium
    } else {
        GapSeverity::Low
    }
}
