use serde::{Deserialize, Serialize};

/// One of the three fixed result buckets, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerCategory {
    Technical,
    Creative,
    Business,
}

impl CareerCategory {
    /// Declaration order. Ranking ties resolve in this order.
    pub const ALL: [CareerCategory; 3] = [
        CareerCategory::Technical,
        CareerCategory::Creative,
        CareerCategory::Business,
    ];

    pub fn index(self) -> usize {
        match self {
            CareerCategory::Technical => 0,
            CareerCategory::Creative => 1,
            CareerCategory::Business => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CareerCategory::Technical => "technical",
            CareerCategory::Creative => "creative",
            CareerCategory::Business => "business",
        }
    }
}

/// A ranked career category as stored on the user and in test results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerOption {
    pub id: CareerCategory,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub careers: Vec<String>,
    pub growth: String,
    pub score: u32,
}
