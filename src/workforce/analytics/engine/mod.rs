mod config;
mod recommendation;
mod rules;

pub use config::AnalyticsConfig;
pub use recommendation::recommend_staffing;

use std::collections::HashMap;

use super::domain::{Employee, EmployeeId, Project, SkillGap, StaffingRecommendation};

/// Stateless engine turning a roster snapshot into per-project gap
/// records. Pure and synchronous: no I/O, no caching, and identical
/// inputs always yield identical ordered output.
pub struct SkillGapEngine {
    config: AnalyticsConfig,
}

impl SkillGapEngine {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Compute one gap record per project, in input project order.
    pub fn compute_gaps(&self, employees: &[Employee], projects: &[Project]) -> Vec<SkillGap> {
        let roster: HashMap<&EmployeeId, &Employee> = employees
            .iter()
            .map(|employee| (&employee.id, employee))
            .collect();

        projects
            .iter()
            .map(|project| rules::gap_for_project(project, &roster, &self.config))
            .collect()
    }

    /// Staffing guidance for a computed gap.
    pub fn recommendation(&self, gap: &SkillGap) -> StaffingRecommendation {
        recommend_staffing(gap.match_percentage(), &self.config)
    }
}

impl Default for SkillGapEngine {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}
