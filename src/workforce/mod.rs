//! Workforce-management workflows: roster analytics and HRIS import.

pub mod analytics;
pub mod hris;
