//! Network connection state reported by the host platform.

use serde::{Deserialize, Serialize};

/// Fallback reported when the platform gives no connection classification.
pub const UNKNOWN_CONNECTION: &str = "unknown";

/// Connection quality classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum EffectiveType {
    #[serde(rename = "4g")]
    FourG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "2g")]
    TwoG,
}

impl EffectiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveType::FourG => "4g",
            EffectiveType::ThreeG => "3g",
            EffectiveType::TwoG => "2g",
        }
    }
}

/// Connectivity snapshot. Classifications outside `4g`/`3g`/`2g` (such as
/// the browser's `slow-2g`) are rejected at deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionState {
    #[serde(default)]
    pub effective_type: Option<EffectiveType>,
    pub is_online: bool,
}

/// Map a connection state to its effective type, `"unknown"` when absent.
pub fn normalize_connection_type(state: &ConnectionState) -> &'static str {
    state
        .effective_type
        .map(|t| t.as_str())
        .unwrap_or(UNKNOWN_CONNECTION)
}
