//! Frontend Models
//!
//! Data structures matching the static `data.json` records.

use serde::{Deserialize, Serialize};

/// Extension record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Image URL
    pub logo: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Which subset of extensions is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Inactive,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Inactive];

    pub fn key(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Inactive => "Inactive",
        }
    }

    pub fn matches(self, extension: &Extension) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => extension.is_active,
            FilterMode::Inactive => !extension.is_active,
        }
    }
}
