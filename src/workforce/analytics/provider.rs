use std::collections::BTreeSet;

use async_trait::async_trait;

use super::domain::{Employee, EmployeeId, Project, ProjectId};

/// Read access to the current rosters.
///
/// Implementations own fetch, credentials, and boundary normalization;
/// the engine only ever sees the strict domain shapes. The two reads are
/// independent so callers may issue them concurrently.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    async fn employees(&self) -> Result<Vec<Employee>, RosterError>;
    async fn projects(&self) -> Result<Vec<Project>, RosterError>;
}

/// Error raised when a roster cannot be produced.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("roster source unavailable: {0}")]
    Unavailable(String),
    #[error("roster payload malformed: {0}")]
    Malformed(String),
}

/// Fixed roster snapshot for tests and for running without a backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    employees: Vec<Employee>,
    projects: Vec<Project>,
}

impl InMemoryRoster {
    pub fn new(employees: Vec<Employee>, projects: Vec<Project>) -> Self {
        Self {
            employees,
            projects,
        }
    }

    /// Built-in sample roster used by the CLI and the server when no CSV
    /// source is configured.
    pub fn demo() -> Self {
        let employees = vec![
            demo_employee("emp-001", "Priya Nair", "Engineering", &["React", "TypeScript"]),
            demo_employee("emp-002", "Jonas Weber", "Engineering", &[]),
            demo_employee("emp-003", "Aline Costa", "Data", &["SQL"]),
            demo_employee("emp-004", "Tom Okafor", "Data", &["Python", "AWS"]),
            demo_employee("emp-005", "Mei Lin", "Operations", &["Excel", "Scheduling"]),
        ];

        let projects = vec![
            demo_project(
                "proj-portal",
                "Customer Portal Revamp",
                "Engineering",
                &["React", "Node"],
                &["emp-001"],
            ),
            demo_project(
                "proj-gateway",
                "Billing Gateway",
                "Engineering",
                &["Go"],
                &["emp-002"],
            ),
            demo_project("proj-wiki", "Internal Wiki", "Operations", &[], &[]),
            demo_project(
                "proj-warehouse",
                "Data Warehouse Buildout",
                "Data",
                &["SQL", "Python", "AWS"],
                &["emp-003", "emp-004"],
            ),
        ];

        Self::new(employees, projects)
    }
}

#[async_trait]
impl RosterProvider for InMemoryRoster {
    async fn employees(&self) -> Result<Vec<Employee>, RosterError> {
        Ok(self.employees.clone())
    }

    async fn projects(&self) -> Result<Vec<Project>, RosterError> {
        Ok(self.projects.clone())
    }
}

fn demo_employee(id: &str, name: &str, department: &str, skills: &[&str]) -> Employee {
    Employee {
        id: EmployeeId(id.to_string()),
        name: name.to_string(),
        department: department.to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
    }
}

fn demo_project(
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
