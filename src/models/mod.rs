//! Read-only content records shown by the screens.
//!
//! Records carry a numeric `id` where a screen needs to select one; nothing
//! here is ever mutated after loading.

mod article;
mod chat;
mod exercise;
mod posture;
mod profile;
mod therapist;

pub use article::Article;
pub use chat::{ChatMessage, Conversation, MessageKind, Presence, Sender};
pub use exercise::{Exercise, ExerciseCategory, ALL_CATEGORIES};
pub use posture::{AreaStatus, PostureArea, PostureReport, Priority, Recommendation};
pub use profile::{Achievement, DailyProgress, HomeFeature, UserProfile};
pub use therapist::{Therapist, AVAILABLE_NOW};
