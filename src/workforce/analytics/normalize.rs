use std::collections::BTreeSet;

use serde::Deserialize;

use super::domain::{Employee, EmployeeId, Project, ProjectId};

/// Employee record as the roster backend returns it. Every field beyond
/// the id is optional and unknown fields are ignored, matching the
/// backend's loosely-shaped documents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmployeeRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

/// Project record as the roster backend returns it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProjectRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
    #[serde(default)]
    pub team_members: Option<Vec<String>>,
}

/// Guard producing the strict roster shapes the engine requires.
///
/// One malformed record degrades that record alone, never the whole
/// roster: missing collections default to empty sets, blank entries are
/// dropped, and a record without a usable id is discarded outright since
/// it could only ever be a dangling target.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterGuard;

impl RosterGuard {
    pub fn normalize_employees(records: Vec<RawEmployeeRecord>) -> Vec<Employee> {
        records.into_iter().filter_map(Self::employee).collect()
    }

    pub fn normalize_projects(records: Vec<RawProjectRecord>) -> Vec<Project> {
        records.into_iter().filter_map(Self::project).collect()
    }

    fn employee(record: RawEmployeeRecord) -> Option<Employee> {
        let id = clean_id(record.id)?;
        let name = clean_text(record.name).unwrap_or_else(|| id.clone());

        Some(Employee {
            id: EmployeeId(id),
            name,
            department: clean_text(record.department).unwrap_or_default(),
            skills: clean_set(record.skills),
        })
    }

    fn project(record: RawProjectRecord) -> Option<Project> {
        let id = clean_id(record.id)?;
        let name = clean_text(record.name).unwrap_or_else(|| id.clone());

        Some(Project {
            id: ProjectId(id),
            name,
            department: clean_text(record.department).unwrap_or_default(),
            required_skills: clean_set(record.required_skills),
            team_members: clean_set(record.team_members)
                .into_iter()
                .map(EmployeeId)
                .collect(),
        })
    }
}

fn clean_id(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn clean_text(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn clean_set(raw: Option<Vec<String>>) -> BTreeSet<String> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
