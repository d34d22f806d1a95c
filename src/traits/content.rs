//! Static content source abstraction.
//!
//! Screens read everything they display through [`ContentSource`]. The
//! source is synchronous and always available; there is no fetch or
//! failure path once it has been constructed.

use crate::models::{
    Achievement, Article, ChatMessage, Conversation, DailyProgress, Exercise, ExerciseCategory,
    HomeFeature, PostureReport, Recommendation, Therapist, UserProfile,
};

/// Read-only, ordered content for every screen.
pub trait ContentSource: Send + Sync {
    fn home_features(&self) -> &[HomeFeature];
    fn daily_progress(&self) -> DailyProgress;

    fn therapists(&self) -> &[Therapist];

    fn exercise_categories(&self) -> &[ExerciseCategory];
    fn exercises(&self) -> &[Exercise];

    fn conversations(&self) -> &[Conversation];
    /// Sample transcript shown for any open conversation.
    fn messages(&self) -> &[ChatMessage];

    fn article_categories(&self) -> &[String];
    fn articles(&self) -> &[Article];
    /// Body paragraphs shown on the article detail view.
    fn article_body(&self) -> &[String];
    /// Article ids bookmarked when the reader opens.
    fn default_bookmarks(&self) -> &[u32];

    fn posture_report(&self) -> &PostureReport;
    fn recommendations(&self) -> &[Recommendation];

    fn user_profile(&self) -> &UserProfile;
    fn achievements(&self) -> &[Achievement];

    fn therapist(&self, id: u32) -> Option<&Therapist> {
        self.therapists().iter().find(|t| t.id == id)
    }

    fn exercise(&self, id: u32) -> Option<&Exercise> {
        self.exercises().iter().find(|e| e.id == id)
    }

    fn conversation(&self, id: u32) -> Option<&Conversation> {
        self.conversations().iter().find(|c| c.id == id)
    }

    fn article(&self, id: u32) -> Option<&Article> {
        self.articles().iter().find(|a| a.id == id)
    }
}
