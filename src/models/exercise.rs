use serde::{Deserialize, Serialize};

/// Category id that disables filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Filter chip on the exercise library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseCategory {
    pub id: String,
    pub name: String,
}

/// A guided exercise program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    pub category: String,
    /// Number of moves in the program
    pub moves: u32,
    pub calories: u32,
    /// Completion percentage, 0 when never started
    pub progress: u8,
}

impl Exercise {
    pub fn has_progress(&self) -> bool {
        self.progress > 0
    }

    /// Label for the list card button.
    pub fn list_action(&self) -> &'static str {
        if self.has_progress() {
            "Continue"
        } else {
            "Start Session"
        }
    }

    /// Label for the primary button on the detail view.
    pub fn detail_action(&self) -> &'static str {
        if self.has_progress() {
            "Continue Exercise"
        } else {
            "Start Exercise"
        }
    }

    pub fn matches_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }
}
