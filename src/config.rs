use serde::{Deserialize, Serialize};

use crate::error::DiveLogError;
use crate::models::Units;

pub const DEFAULT_RECENT_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_TOP_SPECIES_LIMIT: u32 = 5;

/// Knobs for summary computation. Missing JSON fields fall back to defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsConfig {
    /// Entries dated within this many days of "today" count as recent activity
    pub recent_window_days: u32,
    /// Number of species kept in the summary's top list
    pub top_species_limit: u32,
    /// Unit system for depth figures in the summary
    pub units: Units,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
            top_species_limit: DEFAULT_TOP_SPECIES_LIMIT,
            units: Units::Metric,
        }
    }
}

impl StatsConfig {
    pub fn from_json(json: &str) -> Result<Self, DiveLogError> {
        Ok(serde_json::from_str(json)?)
    }
}
