use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of the single `emergency_settings` row.
pub const EMERGENCY_SETTINGS_ID: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencySettings {
    pub hide_green_emoji: bool,
    pub hide_eur_symbol: bool,
}

impl EmergencySettings {
    /// Both protections are on.
    pub fn is_yolo_mode(&self) -> bool {
        self.hide_green_emoji && self.hide_eur_symbol
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    On,
    Off,
}

impl From<bool> for Protection {
    fn from(active: bool) -> Self {
        if active {
            Protection::On
        } else {
            Protection::Off
        }
    }
}

impl fmt::Display for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protection::On => write!(f, "ON"),
            Protection::Off => write!(f, "OFF"),
        }
    }
}
