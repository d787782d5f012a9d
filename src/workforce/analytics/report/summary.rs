use chrono::{DateTime, Utc};

use super::super::domain::{GapSeverity, SkillGap, StaffingRecommendation};
use super::super::engine::{recommend_staffing, AnalyticsConfig};
use super::insights::generate_insights;
use super::views::{
    GapReportResponse, GapReportSummary, SeverityCountEntry, SkillGapView, StaffingCountEntry,
};

/// Aggregation over a computed gap set, ready to be rendered as a
/// dashboard summary or an API response.
#[derive(Debug)]
pub struct GapReport<'a> {
    gaps: &'a [SkillGap],
    config: &'a AnalyticsConfig,
}

impl<'a> GapReport<'a> {
    pub fn new(gaps: &'a [SkillGap], config: &'a AnalyticsConfig) -> Self {
        Self { gaps, config }
    }

    pub fn summary(&self) -> GapReportSummary {
        let severity_counts = GapSeverity::ordered()
            .into_iter()
            .map(|severity| SeverityCountEntry {
                severity,
                severity_label: severity.label(),
                projects: self
                    .gaps
                    .iter()
                    .filter(|gap| gap.severity == severity)
                    .count(),
            })
            .collect();

        let staffing_counts = StaffingRecommendation::ordered()
            .into_iter()
            .map(|recommendation| StaffingCountEntry {
                recommendation,
                recommendation_label: recommendation.label(),
                projects: self
                    .gaps
                    .iter()
                    .filter(|gap| {
                        recommend_staffing(gap.match_percentage(), self.config) == recommendation
                    })
                    .count(),
            })
            .collect();

        let critical_gaps = self
            .gaps
            .iter()
            .filter(|gap| gap.severity == GapSeverity::High)
            .map(|gap| SkillGapView::build(gap, self.config))
            .collect();

        let fully_covered_projects = self
            .gaps
            .iter()
            .filter(|gap| gap.missing_skills.is_empty())
            .count();

        let (observations, recommended_actions) = generate_insights(self.gaps, self.config);

        GapReportSummary {
            total_projects: self.gaps.len(),
            fully_covered_projects,
            severity_counts,
            staffing_counts,
            critical_gaps,
            observations,
            recommended_actions,
        }
    }

    /// Full response body for the listing endpoint: per-project views plus
    /// the aggregate summary.
    pub fn response(&self, generated_at: DateTime<Utc>) -> GapReportResponse {
        GapReportResponse {
            generated_at,
            total_projects: self.gaps.len(),
            gaps: self
                .gaps
                .iter()
                .map(|gap| SkillGapView::build(gap, self.config))
                .collect(),
            summary: self.summary(),
        }
    }
}
