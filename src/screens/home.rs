//! Home dashboard.
//!
//! The dashboard has no sub-views, only a cursor over its tiles: the five
//! feature tiles from content followed by the profile shortcut.

use super::step_cursor;
use crate::app::ScreenId;
use crate::traits::ContentSource;

#[derive(Debug, Default)]
pub struct HomeScreen {
    cursor: usize,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of selectable tiles, profile shortcut included.
    pub fn tile_count(content: &dyn ContentSource) -> usize {
        content.home_features().len() + 1
    }

    pub fn move_cursor(&mut self, delta: isize, content: &dyn ContentSource) {
        self.cursor = step_cursor(self.cursor, delta, Self::tile_count(content));
    }

    /// Screen opened by the tile at `index`.
    ///
    /// Feature routes go through the lenient lookup, so a bad route in
    /// content opens home rather than failing.
    pub fn target_at(index: usize, content: &dyn ContentSource) -> Option<ScreenId> {
        let features = content.home_features();
        if index < features.len() {
            Some(ScreenId::from_route(&features[index].route))
        } else if index == features.len() {
            Some(ScreenId::Profile)
        } else {
            None
        }
    }

    pub fn selected_target(&self, content: &dyn ContentSource) -> Option<ScreenId> {
        Self::target_at(self.cursor, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    #[test]
    fn test_targets_follow_feature_order() {
        let content = Content::embedded().unwrap();
        let targets: Vec<_> = (0..HomeScreen::tile_count(&content))
            .filter_map(|i| HomeScreen::target_at(i, &content))
            .collect();
        assert_eq!(
            targets,
            vec![
                ScreenId::NearTherapy,
                ScreenId::ExerciseFit,
                ScreenId::TelePhysio,
                ScreenId::JournalLink,
                ScreenId::PostureIq,
                ScreenId::Profile,
            ]
        );
        assert_eq!(HomeScreen::target_at(99, &content), None);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let content = Content::embedded().unwrap();
        let mut home = HomeScreen::new();
        home.move_cursor(-1, &content);
        assert_eq!(home.cursor(), 0);
        home.move_cursor(100, &content);
        assert_eq!(home.cursor(), 5);
        assert_eq!(home.selected_target(&content), Some(ScreenId::Profile));
    }
}
