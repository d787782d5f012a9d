use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::normalizer::{clean_cell, split_list};
use crate::workforce::analytics::normalize::{RawEmployeeRecord, RawProjectRecord};

#[derive(Debug, Deserialize)]
struct EmployeeRow {
    #[serde(rename = "Employee ID")]
    id: String,
    #[serde(rename = "Name", default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(
        rename = "Department",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    department: Option<String>,
    #[serde(rename = "Skills", default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectRow {
    #[serde(rename = "Project ID")]
    id: String,
    #[serde(rename = "Name", default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(
        rename = "Department",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    department: Option<String>,
    #[serde(
        rename = "Required Skills",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    required_skills: Option<String>,
    #[serde(
        rename = "Team Members",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    team_members: Option<String>,
}

pub(crate) fn parse_employee_records<R: Read>(
    reader: R,
) -> Result<Vec<RawEmployeeRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<EmployeeRow>() {
        let row = row?;
        records.push(RawEmployeeRecord {
            id: Some(clean_cell(&row.id)),
            name: row.name.as_deref().map(clean_cell),
            department: row.department.as_deref().map(clean_cell),
            skills: row.skills.as_deref().map(split_list),
        });
    }

    Ok(records)
}

pub(crate) fn parse_project_records<R: Read>(
    reader: R,
) -> Result<Vec<RawProjectRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<ProjectRow>() {
        let row = row?;
        records.push(RawProjectRecord {
            id: Some(clean_cell(&row.id)),
            name: row.name.as_deref().map(clean_cell),
            department: row.department.as_deref().map(clean_cell),
            required_skills: row.required_skills.as_deref().map(split_list),
            team_members: row.team_members.as_deref().map(split_list),
        });
    }

    Ok(records)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
