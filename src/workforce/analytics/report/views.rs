use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{GapSeverity, ProjectId, SkillGap, StaffingRecommendation};
use super::super::engine::{recommend_staffing, AnalyticsConfig};

/// Wire view of a single computed gap.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGapView {
    pub project_id: ProjectId,
    pub project_name: String,
    pub required_skills: Vec<String>,
    pub available_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub severity: GapSeverity,
    pub severity_label: &'static str,
    pub match_percentage: u8,
    pub employees_with_skills: usize,
    pub total_employees_needed: usize,
    pub recommendation: StaffingRecommendation,
    pub recommendation_label: &'static str,
}

impl SkillGapView {
    pub fn build(gap: &SkillGap, config: &AnalyticsConfig) -> Self {
        let match_percentage = gap.match_percentage();
        let recommendation = recommend_staffing(match_percentage, config);

        Self {
            project_id: gap.project_id.clone(),
            project_name: gap.project_name.clone(),
            required_skills: gap.required_skills.iter().cloned().collect(),
            available_skills: gap.available_skills.iter().cloned().collect(),
            missing_skills: gap.missing_skills.iter().cloned().collect(),
            severity: gap.severity,
            severity_label: gap.severity.label(),
            match_percentage,
            employees_with_skills: gap.employees_with_skills,
            total_employees_needed: gap.total_employees_needed,
            recommendation,
            recommendation_label: recommendation.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeverityCountEntry {
    pub severity: GapSeverity,
    pub severity_label: &'static str,
    pub projects: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StaffingCountEntry {
    pub recommendation: StaffingRecommendation,
    pub recommendation_label: &'static str,
    pub projects: usize,
}

/// Aggregated dashboard summary over a (possibly filtered) gap set.
#[derive(Debug, Clone, Serialize)]
pub struct GapReportSummary {
    pub total_projects: usize,
    pub fully_covered_projects: usize,
    pub severity_counts: Vec<SeverityCountEntry>,
    pub staffing_counts: Vec<StaffingCountEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub critical_gaps: Vec<SkillGapView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
}

/// Response body for the listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GapReportResponse {
    pub generated_at: DateTime<Utc>,
    pub total_projects: usize,
    pub gaps: Vec<SkillGapView>,
    pub summary: GapReportSummary,
}
