use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for roster employees.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

/// Identifier wrapper for projects.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

/// Employee snapshot as consumed by the analytics engine.
///
/// `department` participates in filtering only, never in gap computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub skills: BTreeSet<String>,
}

/// Project snapshot with its requirement and assignment sets. Either set
/// may be empty (no stated requirement, or an unstaffed project).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub department: String,
    pub required_skills: BTreeSet<String>,
    pub team_members: BTreeSet<EmployeeId>,
}

/// Qualitative bucket summarizing how much of a project's skill
/// requirement is unmet by its assigned staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    Low,
    Medium,
    High,
}

impl GapSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            GapSeverity::Low => "low",
            GapSeverity::Medium => "medium",
            GapSeverity::High => "high",
        }
    }

    /// Display order for summaries, most severe first.
    pub const fn ordered() -> [GapSeverity; 3] {
        [GapSeverity::High, GapSeverity::Medium, GapSeverity::Low]
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown severity '{0}', expected low, medium, or high")]
pub struct ParseSeverityError(pub String);

impl FromStr for GapSeverity {
    type Err = ParseSeverityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(GapSeverity::Low),
            "medium" => Ok(GapSeverity::Medium),
            "high" => Ok(GapSeverity::High),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

/// Staffing guidance derived from a gap's match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingRecommendation {
    WellStaffed,
    TrainExistingStaff,
    HireOrReassign,
}

impl StaffingRecommendation {
    pub const fn label(self) -> &'static str {
        match self {
            StaffingRecommendation::WellStaffed => "well-staffed",
            StaffingRecommendation::TrainExistingStaff => "train existing staff",
            StaffingRecommendation::HireOrReassign => "urgent: hire or reassign",
        }
    }

    pub const fn ordered() -> [StaffingRecommendation; 3] {
        [
            StaffingRecommendation::HireOrReassign,
            StaffingRecommendation::TrainExistingStaff,
            StaffingRecommendation::WellStaffed,
        ]
    }
}

/// Per-project gap record derived from one roster snapshot.
///
/// Has no identity or lifecycle of its own: it is recomputed in full
/// whenever either roster changes and is never persisted or mutated in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub project_id: ProjectId,
    pub project_name: String,
    pub required_skills: BTreeSet<String>,
    pub available_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub severity: GapSeverity,
    pub employees_with_skills: usize,
    pub total_employees_needed: usize,
}

impl SkillGap {
    /// Count of required skills covered by the assigned staff.
    pub fn matched_skills(&self) -> usize {
        self.required_skills
            .intersection(&self.available_skills)
            .count()
    }

    /// Share (0..=100) of required skills present among assigned staff.
    ///
    /// A project with no stated requirements counts as fully matched.
    pub fn match_percentage(&self) -> u8 {
        if self.required_skills.is_empty() {
            return 100;
        }

        let matched = self.matched_skills() as f32;
        let required = self.required_skills.len() as f32;
        (matched / required * 100.0).round() as u8
    }
}

/// Project lookup for filter predicates that need project metadata.
/// Duplicate ids resolve last-wins.
#[derive(Debug, Default)]
pub struct ProjectIndex {
    by_id: HashMap<ProjectId, Project>,
}

impl ProjectIndex {
    pub fn build(projects: &[Project]) -> Self {
        let by_id = projects
            .iter()
            .map(|project| (project.id.clone(), project.clone()))
            .collect();
        Self { by_id }
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.by_id.get(id)
    }

    pub fn department_of(&self, id: &ProjectId) -> Option<&str> {
        self.by_id.get(id).map(|project| project.department.as_str())
    }
}
