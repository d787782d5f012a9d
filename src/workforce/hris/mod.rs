//! Roster import from HRIS CSV exports.
//!
//! The HRIS exports two files: an employee listing and a project listing,
//! both with `;`-separated multi-value cells. Rows are parsed into the raw
//! backend shapes and then pushed through `RosterGuard`, so CSV data gets
//! exactly the same normalization as backend payloads.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::workforce::analytics::domain::{Employee, Project};
use crate::workforce::analytics::normalize::RosterGuard;
use crate::workforce::analytics::provider::{RosterError, RosterProvider};

#[derive(Debug)]
pub enum HrisImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for HrisImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HrisImportError::Io(err) => write!(f, "failed to read HRIS export: {}", err),
            HrisImportError::Csv(err) => write!(f, "invalid HRIS CSV data: {}", err),
        }
    }
}

impl std::error::Error for HrisImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HrisImportError::Io(err) => Some(err),
            HrisImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for HrisImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for HrisImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<HrisImportError> for RosterError {
    fn from(err: HrisImportError) -> Self {
        match err {
            HrisImportError::Io(err) => RosterError::Unavailable(err.to_string()),
            HrisImportError::Csv(err) => RosterError::Malformed(err.to_string()),
        }
    }
}

pub struct HrisRosterImporter;

impl HrisRosterImporter {
    pub fn employees_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Employee>, HrisImportError> {
        let file = std::fs::File::open(path)?;
        Self::employees_from_reader(file)
    }

    pub fn employees_from_reader<R: Read>(reader: R) -> Result<Vec<Employee>, HrisImportError> {
        let records = parser::parse_employee_records(reader)?;
        Ok(RosterGuard::normalize_employees(records))
    }

    pub fn projects_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Project>, HrisImportError> {
        let file = std::fs::File::open(path)?;
        Self::projects_from_reader(file)
    }

    pub fn projects_from_reader<R: Read>(reader: R) -> Result<Vec<Project>, HrisImportError> {
        let records = parser::parse_project_records(reader)?;
        Ok(RosterGuard::normalize_projects(records))
    }
}

/// Roster provider backed by HRIS CSV exports. Files are re-read on every
/// call so a refreshed export is picked up without a restart, and derived
/// gaps are never computed from a stale cache.
#[derive(Debug, Clone)]
pub struct CsvRosterSource {
    employees_path: PathBuf,
    projects_path: PathBuf,
}

impl CsvRosterSource {
    pub fn new(employees_path: PathBuf, projects_path: PathBuf) -> Self {
        Self {
            employees_path,
            projects_path,
        }
    }
}

#[async_trait]
impl RosterProvider for CsvRosterSource {
    async fn employees(&self) -> Result<Vec<Employee>, RosterError> {
        Ok(HrisRosterImporter::employees_from_path(&self.employees_path)?)
    }

    async fn projects(&self) -> Result<Vec<Project>, RosterError> {
        Ok(HrisRosterImporter::projects_from_path(&self.projects_path)?)
    }
}
