//! Skill-gap analysis over the TaskVise roster.
//!
//! The engine is a pure transformation from `(employees, projects)` to
//! one derived gap record per project; everything around it (provider,
//! service, router, report) is the plumbing that feeds it and serves the
//! results.

pub mod domain;
pub mod engine;
pub mod filter;
pub mod normalize;
pub mod provider;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Employee, EmployeeId, GapSeverity, ParseSeverityError, Project, ProjectId, ProjectIndex,
    SkillGap, StaffingRecommendation,
};
pub use engine::{recommend_staffing, AnalyticsConfig, SkillGapEngine};
pub use filter::{filter_gaps, GapFilter};
pub use normalize::{RawEmployeeRecord, RawProjectRecord, RosterGuard};
pub use provider::{InMemoryRoster, RosterError, RosterProvider};
pub use report::GapReport;
pub use router::analytics_router;
pub use service::{GapSnapshot, SkillGapService};
