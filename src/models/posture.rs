use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AreaStatus {
    Excellent,
    Good,
    Moderate,
}

impl AreaStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AreaStatus::Excellent => "excellent",
            AreaStatus::Good => "good",
            AreaStatus::Moderate => "moderate",
        }
    }
}

/// Score for one body region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostureArea {
    pub name: String,
    pub score: u8,
    pub status: AreaStatus,
    pub issue: String,
}

/// Result of a (simulated) posture analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostureReport {
    pub overall_score: u8,
    pub areas: Vec<PostureArea>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high priority",
            Priority::Medium => "medium priority",
            Priority::Low => "low priority",
        }
    }
}

/// Corrective exercise suggested after an analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub frequency: String,
    pub priority: Priority,
}
