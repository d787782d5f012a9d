use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workforce::analytics::domain::{Employee, EmployeeId, Project, ProjectId};
use crate::workforce::analytics::engine::AnalyticsConfig;
use crate::workforce::analytics::provider::{InMemoryRoster, RosterError, RosterProvider};
use crate::workforce::analytics::service::SkillGapService;

pub(super) fn employee(id: &str, department: &str, skills: &[&str]) -> Employee {
    Employee {
        id: EmployeeId(id.to_string()),
        name: format!("Employee {id}"),
        department: department.to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
    }
}

pub(super) fn project(
    id: &str,
    name: &str,
    department: &str,
    required_skills: &[&str],
    team_members: &[&str],
) -> Project {
    Project {
        id: ProjectId(id.to_string()),
        name: name.to_string(),
        department: department.to_string(),
        required_skills: required_skills.iter().map(|skill| skill.to_string()).collect(),
        team_members: team_members
            .iter()
            .map(|member| EmployeeId(member.to_string()))
            .collect::<BTreeSet<_>>(),
    }
}

/// Roster exercising every severity bucket and both edge cases (empty
/// requirement, skill-less assignee).
pub(super) fn sample_roster() -> (Vec<Employee>, Vec<Project>) {
    let employees = vec![
        employee("e-react", "Engineering", &["React"]),
        employee("e-none", "Engineering", &[]),
        employee("e-sql", "Data", &["SQL"]),
        employee("e-cloud", "Data", &["Python", "AWS"]),
    ];

    let projects = vec![
        project(
            "p-portal",
            "Customer Portal",
            "Engineering",
            &["React", "Node"],
            &["e-react"],
        ),
        project("p-gateway", "Billing Gateway", "Engineering", &["Go"], &["e-none"]),
        project("p-wiki", "Internal Wiki", "Operations", &[], &[]),
        project(
            "p-warehouse",
            "Data Warehouse",
            "Data",
            &["SQL", "Python", "AWS"],
            &["e-sql", "e-cloud"],
        ),
    ];

    (employees, projects)
}

pub(super) fn sample_service() -> Arc<SkillGapService<InMemoryRoster>> {
    let (employees, projects) = sample_roster();
    Arc::new(SkillGapService::new(
        Arc::new(InMemoryRoster::new(employees, projects)),
        AnalyticsConfig::default(),
    ))
}

/// Provider simulating an unreachable roster backend on either read.
#[derive(Debug, Default)]
pub(super) struct FailingRoster {
    pub fail_employees: bool,
    pub fail_projects: bool,
}

#[async_trait]
impl RosterProvider for FailingRoster {
    async fn employees(&self) -> Result<Vec<Employee>, RosterError> {
        if self.fail_employees {
            return Err(RosterError::Unavailable("employees endpoint down".to_string()));
        }
        Ok(Vec::new())
    }

    async fn projects(&self) -> Result<Vec<Project>, RosterError> {
        if self.fail_projects {
            return Err(RosterError::Unavailable("projects endpoint down".to_string()));
        }
        Ok(Vec::new())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
