use serde::{Deserialize, Serialize};

/// Availability text that marks a therapist as bookable right away.
pub const AVAILABLE_NOW: &str = "Available Now";

/// A physiotherapist listed by the locator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Therapist {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub rating: f32,
    pub distance: String,
    pub availability: String,
    pub experience: String,
    pub phone: String,
    pub hours: String,
    pub reviews: u32,
}

impl Therapist {
    pub fn is_available_now(&self) -> bool {
        self.availability == AVAILABLE_NOW
    }

    /// "4.9 (124 reviews)"
    pub fn rating_label(&self) -> String {
        format!("{:.1} ({} reviews)", self.rating, self.reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn therapist(availability: &str) -> Therapist {
        Therapist {
            id: 1,
            name: "Dr. Test".to_string(),
            specialization: "Sports".to_string(),
            rating: 4.9,
            distance: "1 km".to_string(),
            availability: availability.to_string(),
            experience: "3 years".to_string(),
            phone: "+1".to_string(),
            hours: "9-5".to_string(),
            reviews: 12,
        }
    }

    #[test]
    fn test_availability() {
        assert!(therapist("Available Now").is_available_now());
        assert!(!therapist("Next: 2 PM").is_available_now());
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(therapist("x").rating_label(), "4.9 (12 reviews)");
    }
}
