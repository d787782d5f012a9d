use serde::{Deserialize, Serialize};

/// Threshold configuration for severity classification and staffing
/// recommendations. The defaults carry the product's fixed business
/// constants; nothing reads them from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Missing-skill fraction strictly above which a gap is High.
    pub high_missing_fraction: f32,
    /// Missing-skill fraction strictly above which a gap is Medium.
    pub medium_missing_fraction: f32,
    /// Match percentage at or above which a project is well-staffed.
    pub well_staffed_match: u8,
    /// Match percentage at or above which training existing staff suffices.
    pub train_match: u8,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            high_missing_fraction: 0.50,
            medium_missing_fraction: 0.20,
            well_staffed_match: 80,
            train_match: 50,
        }
    }
}
