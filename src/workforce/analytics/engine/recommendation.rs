use super::super::domain::StaffingRecommendation;
use super::config::AnalyticsConfig;

/// Map a gap's match percentage to staffing guidance.
pub fn recommend_staffing(
    match_percentage: u8,
    config: &AnalyticsConfig,
) -> StaffingRecommendation {
    if match_percentage >= config.well_staffed_match {
        StaffingRecommendation::WellStaffed
    } else if match_percentage >= config.train_match {
        StaffingRecommendation::TrainExistingStaff
    } else {
        StaffingRecommendation::HireOrReassign
    }
}
