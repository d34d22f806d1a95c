//! Bundled sample content.
//!
//! The default bundle is compiled in from `assets/content.json`. A different
//! bundle with the same shape can be loaded from disk to demo other data.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PhysioError, PhysioResult};
use crate::models::{
    Achievement, Article, ChatMessage, Conversation, DailyProgress, Exercise, ExerciseCategory,
    HomeFeature, PostureReport, Recommendation, Therapist, UserProfile,
};
use crate::traits::ContentSource;

const EMBEDDED_CONTENT: &str = include_str!("../assets/content.json");

/// In-memory content bundle.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    home_features: Vec<HomeFeature>,
    #[serde(default)]
    daily_progress: DailyProgress,
    therapists: Vec<Therapist>,
    exercise_categories: Vec<ExerciseCategory>,
    exercises: Vec<Exercise>,
    conversations: Vec<Conversation>,
    messages: Vec<ChatMessage>,
    #[serde(default)]
    article_categories: Vec<String>,
    articles: Vec<Article>,
    #[serde(default)]
    article_body: Vec<String>,
    #[serde(default)]
    default_bookmarks: Vec<u32>,
    posture_report: PostureReport,
    recommendations: Vec<Recommendation>,
    user_profile: UserProfile,
    achievements: Vec<Achievement>,
}

impl Content {
    /// Parse the bundle compiled into the binary.
    pub fn embedded() -> PhysioResult<Self> {
        Self::from_json(EMBEDDED_CONTENT, "embedded content")
    }

    /// Parse a bundle from a JSON string. `origin` is used in error messages.
    pub fn from_json(json: &str, origin: &str) -> PhysioResult<Self> {
        serde_json::from_str(json).map_err(|source| PhysioError::ContentParse {
            origin: origin.to_string(),
            source,
        })
    }

    /// Read and parse a bundle from disk.
    pub fn load(path: &Path) -> PhysioResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PhysioError::ContentIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, &path.display().to_string())
    }

    /// Load from `path` when given, otherwise fall back to the embedded bundle.
    pub fn load_or_embedded(path: Option<&Path>) -> PhysioResult<Self> {
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading content bundle");
                Self::load(path)
            }
            None => Self::embedded(),
        }
    }
}

impl ContentSource for Content {
    fn home_features(&self) -> &[HomeFeature] {
        &self.home_features
    }

    fn daily_progress(&self) -> DailyProgress {
        self.daily_progress
    }

    fn therapists(&self) -> &[Therapist] {
        &self.therapists
    }

    fn exercise_categories(&self) -> &[ExerciseCategory] {
        &self.exercise_categories
    }

    fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn article_categories(&self) -> &[String] {
        &self.article_categories
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn article_body(&self) -> &[String] {
        &self.article_body
    }

    fn default_bookmarks(&self) -> &[u32] {
        &self.default_bookmarks
    }

    fn posture_report(&self) -> &PostureReport {
        &self.posture_report
    }

    fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    fn user_profile(&self) -> &UserProfile {
        &self.user_profile
    }

    fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MessageKind, Presence, Priority};
    use std::io::Write;

    #[test]
    fn test_embedded_content_parses() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.home_features().len(), 5);
        assert_eq!(content.therapists().len(), 3);
        assert_eq!(content.exercises().len(), 4);
        assert_eq!(content.exercise_categories()[0].id, "all");
        assert_eq!(content.conversations().len(), 3);
        assert_eq!(content.messages().len(), 6);
        assert_eq!(content.articles().len(), 4);
        assert_eq!(content.default_bookmarks(), &[1, 3]);
        assert_eq!(content.posture_report().overall_score, 78);
        assert_eq!(content.posture_report().areas.len(), 5);
        assert_eq!(content.recommendations().len(), 3);
        assert_eq!(content.achievements().len(), 4);
        assert_eq!(content.user_profile().name, "Alex Johnson");
    }

    #[test]
    fn test_enum_fields_decode() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.conversations()[1].status, Presence::Away);
        assert_eq!(content.messages()[4].kind, MessageKind::Video);
        assert_eq!(content.recommendations()[2].priority, Priority::Medium);
    }

    #[test]
    fn test_lookup_by_id() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.exercise(2).unwrap().title, "Core Strengthening");
        assert!(content.exercise(99).is_none());
        assert_eq!(content.therapist(3).unwrap().name, "Dr. Emma Rodriguez");
        assert_eq!(content.conversation(1).unwrap().unread, 2);
        assert!(content.article(0).is_none());
    }

    #[test]
    fn test_order_is_preserved() {
        let content = Content::embedded().unwrap();
        let ids: Vec<u32> = content.articles().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EMBEDDED_CONTENT.as_bytes()).unwrap();

        let content = Content::load(file.path()).unwrap();
        assert_eq!(content.therapists().len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Content::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, PhysioError::ContentIo { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Content::from_json("{\"therapists\": 3}", "test").unwrap_err();
        assert!(matches!(err, PhysioError::ContentParse { .. }));
    }

    #[test]
    fn test_load_or_embedded_without_path() {
        let content = Content::load_or_embedded(None).unwrap();
        assert_eq!(content.exercises().len(), 4);
    }
}
