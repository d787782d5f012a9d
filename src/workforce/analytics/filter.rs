use super::domain::{GapSeverity, ProjectId, ProjectIndex, SkillGap};

/// Conjunctive filter over computed gap records. `None` fields pass
/// everything through; callers translating the HTTP query layer map the
/// legacy `"all"` sentinel to `None` before it gets here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GapFilter {
    pub search: Option<String>,
    pub project: Option<ProjectId>,
    pub severity: Option<GapSeverity>,
    pub department: Option<String>,
}

impl GapFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.project.is_none()
            && self.severity.is_none()
            && self.department.is_none()
    }
}

/// Apply `filter` to `gaps`, preserving order and leaving the input
/// untouched.
pub fn filter_gaps(
    gaps: &[SkillGap],
    filter: &GapFilter,
    projects: &ProjectIndex,
) -> Vec<SkillGap> {
    gaps.iter()
        .filter(|gap| matches_search(gap, filter.search.as_deref()))
        .filter(|gap| {
            filter
                .project
                .as_ref()
                .map_or(true, |id| &gap.project_id == id)
        })
        .filter(|gap| {
            filter
                .severity
                .map_or(true, |severity| gap.severity == severity)
        })
        .filter(|gap| matches_department(gap, filter.department.as_deref(), projects))
        .cloned()
        .collect()
}

/// Case-insensitive substring match over the project name and both skill
/// sets.
fn matches_search(gap: &SkillGap, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };

    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    gap.project_name.to_lowercase().contains(&needle)
        || gap
            .missing_skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
        || gap
            .required_skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
}

fn matches_department(gap: &SkillGap, department: Option<&str>, projects: &ProjectIndex) -> bool {
    let Some(department) = department else {
        return true;
    };

    projects
        .department_of(&gap.project_id)
        .map_or(false, |found| found == department)
}
