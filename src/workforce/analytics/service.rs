use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::domain::{Employee, Project, ProjectIndex, SkillGap};
use super::engine::{AnalyticsConfig, SkillGapEngine};
use super::filter::{filter_gaps, GapFilter};
use super::provider::{RosterError, RosterProvider};

/// Service composing the roster provider and the gap engine.
pub struct SkillGapService<P> {
    provider: Arc<P>,
    engine: SkillGapEngine,
}

impl<P> SkillGapService<P>
where
    P: RosterProvider + 'static,
{
    pub fn new(provider: Arc<P>, config: AnalyticsConfig) -> Self {
        Self {
            provider,
            engine: SkillGapEngine::new(config),
        }
    }

    pub fn engine(&self) -> &SkillGapEngine {
        &self.engine
    }

    /// Fetch both rosters concurrently and derive the full gap set.
    ///
    /// The reads are independent but both must succeed; a failure of
    /// either aborts the snapshot so the engine never runs on partial
    /// data. Nothing is cached between calls.
    pub async fn snapshot(&self) -> Result<GapSnapshot, RosterError> {
        let (employees, projects) =
            tokio::try_join!(self.provider.employees(), self.provider.projects())?;

        let gaps = self.engine.compute_gaps(&employees, &projects);

        Ok(GapSnapshot {
            generated_at: Utc::now(),
            employees,
            projects,
            gaps,
        })
    }
}

/// Derived view over one roster fetch.
#[derive(Debug, Clone)]
pub struct GapSnapshot {
    pub generated_at: DateTime<Utc>,
    pub employees: Vec<Employee>,
    pub projects: Vec<Project>,
    pub gaps: Vec<SkillGap>,
}

impl GapSnapshot {
    pub fn project_index(&self) -> ProjectIndex {
        ProjectIndex::build(&self.projects)
    }

    /// Filtered copy of the gap set, in input project order.
    pub fn filtered(&self, filter: &GapFilter) -> Vec<SkillGap> {
        filter_gaps(&self.gaps, filter, &self.project_index())
    }
}
