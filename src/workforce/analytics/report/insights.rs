use std::collections::HashMap;

use super::super::domain::{SkillGap, StaffingRecommendation};
use super::super::engine::{recommend_staffing, AnalyticsConfig};

/// Derive human-readable observations and recommended actions from a gap
/// set. Returned as (observations, recommended_actions).
pub(crate) fn generate_insights(
    gaps: &[SkillGap],
    config: &AnalyticsConfig,
) -> (Vec<String>, Vec<String>) {
    let mut observations = Vec::new();
    let mut recommended_actions = Vec::new();

    if gaps.is_empty() {
        observations.push("No projects in scope for this report".to_string());
        return (observations, recommended_actions);
    }

    let fully_covered = gaps
        .iter()
        .filter(|gap| gap.missing_skills.is_empty())
        .count();
    observations.push(format!(
        "{} of {} project(s) fully cover their required skills",
        fully_covered,
        gaps.len()
    ));

    let urgent: Vec<&SkillGap> = gaps
        .iter()
        .filter(|gap| {
            recommend_staffing(gap.match_percentage(), config)
                == StaffingRecommendation::HireOrReassign
        })
        .collect();
    if !urgent.is_empty() {
        observations.push(format!(
            "{} project(s) are below {}% skill match and need hiring or reassignment",
            urgent.len(),
            config.train_match
        ));
    }

    let unstaffed = gaps
        .iter()
        .filter(|gap| gap.available_skills.is_empty() && !gap.required_skills.is_empty())
        .count();
    if unstaffed > 0 {
        observations.push(format!(
            "{} project(s) have no usable skills on their assigned team",
            unstaffed
        ));
    }

    // The skill missing from the most projects is the best single hiring
    // or training target.
    let mut demand: HashMap<&str, usize> = HashMap::new();
    for gap in gaps {
        for skill in &gap.missing_skills {
            *demand.entry(skill.as_str()).or_default() += 1;
        }
    }
    if let Some((skill, count)) = demand
        .into_iter()
        .max_by_key(|(skill, count)| (*count, std::cmp::Reverse(*skill)))
    {
        if count > 1 {
            observations.push(format!(
                "'{}' is the most demanded missing skill ({} project gaps)",
                skill, count
            ));
            recommended_actions.push(format!(
                "Prioritize recruiting or training for '{}' to close {} gaps at once",
                skill, count
            ));
        }
    }

    for gap in urgent.iter().take(3) {
        recommended_actions.push(format!(
            "Hire or reassign staff for {} ({}% skill match, missing: {})",
            gap.project_name,
            gap.match_percentage(),
            join_skills(gap)
        ));
    }

    let trainable: Vec<&SkillGap> = gaps
        .iter()
        .filter(|gap| {
            recommend_staffing(gap.match_percentage(), config)
                == StaffingRecommendation::TrainExistingStaff
        })
        .collect();
    for gap in trainable.iter().take(3) {
        recommended_actions.push(format!(
            "Plan training for {} to cover {}",
            gap.project_name,
            join_skills(gap)
        ));
    }

    if recommended_actions.is_empty() {
        recommended_actions
            .push("All projects are adequately staffed; no staffing action required".to_string());
    }

    (observations, recommended_actions)
}

fn join_skills(gap: &SkillGap) -> String {
    gap.missing_skills
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}
