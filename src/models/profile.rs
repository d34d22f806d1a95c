use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub member_since: String,
    pub completed_sessions: u32,
    pub current_streak: u32,
    pub total_minutes: u32,
}

impl UserProfile {
    /// Initials for the avatar placeholder, e.g. "AJ".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub earned: bool,
}

impl Achievement {
    pub fn badge(&self) -> &'static str {
        if self.earned {
            "Earned"
        } else {
            "Locked"
        }
    }
}

/// A feature tile on the home dashboard.
///
/// `route` names the screen the tile opens; see `ScreenId::from_route`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeFeature {
    pub route: String,
    pub title: String,
    pub subtitle: String,
}

/// "Today's Progress" figures on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DailyProgress {
    pub sessions: u32,
    pub minutes: u32,
    pub goal_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let user = UserProfile {
            name: "Alex Johnson".to_string(),
            email: String::new(),
            member_since: String::new(),
            completed_sessions: 0,
            current_streak: 0,
            total_minutes: 0,
        };
        assert_eq!(user.initials(), "AJ");
    }

    #[test]
    fn test_badge() {
        let a = Achievement {
            title: "x".to_string(),
            description: String::new(),
            earned: false,
        };
        assert_eq!(a.badge(), "Locked");
    }
}
