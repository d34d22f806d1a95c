//! Therapist locator: map view and list view.
//!
//! Selecting a therapist records the choice but does not open a detail
//! view; there is none wired for this screen.

use super::step_cursor;
use crate::models::Therapist;
use crate::traits::ContentSource;

/// Therapists pinned on the map's bottom sheet.
const MAP_SHEET_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocatorView {
    #[default]
    Map,
    List,
}

#[derive(Debug, Default)]
pub struct NearTherapyScreen {
    view: LocatorView,
    selected: Option<u32>,
    cursor: usize,
}

impl NearTherapyScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> LocatorView {
        self.view
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toggle_view(&mut self) {
        let next = match self.view {
            LocatorView::Map => LocatorView::List,
            LocatorView::List => LocatorView::Map,
        };
        self.set_view(next);
    }

    pub fn show_map(&mut self) {
        self.set_view(LocatorView::Map);
    }

    pub fn show_list(&mut self) {
        self.set_view(LocatorView::List);
    }

    fn set_view(&mut self, view: LocatorView) {
        if self.view != view {
            tracing::debug!(?view, "locator view");
            self.view = view;
            self.cursor = 0;
        }
    }

    /// Therapists visible in the current view, in content order.
    pub fn visible<'c>(&self, content: &'c dyn ContentSource) -> &'c [Therapist] {
        let all = content.therapists();
        match self.view {
            LocatorView::Map => &all[..all.len().min(MAP_SHEET_LEN)],
            LocatorView::List => all,
        }
    }

    pub fn move_cursor(&mut self, delta: isize, content: &dyn ContentSource) {
        self.cursor = step_cursor(self.cursor, delta, self.visible(content).len());
    }

    /// Record a selection. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: u32, content: &dyn ContentSource) -> bool {
        if content.therapist(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn select_at_cursor(&mut self, content: &dyn ContentSource) -> bool {
        match self.visible(content).get(self.cursor) {
            Some(t) => {
                let id = t.id;
                self.select(id, content)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    #[test]
    fn test_starts_on_map() {
        let screen = NearTherapyScreen::new();
        assert_eq!(screen.view(), LocatorView::Map);
        assert_eq!(screen.selected(), None);
    }

    #[test]
    fn test_toggle_flips_view() {
        let mut screen = NearTherapyScreen::new();
        screen.toggle_view();
        assert_eq!(screen.view(), LocatorView::List);
        screen.toggle_view();
        assert_eq!(screen.view(), LocatorView::Map);
        screen.show_list();
        screen.show_list();
        assert_eq!(screen.view(), LocatorView::List);
    }

    #[test]
    fn test_map_shows_first_two() {
        let content = Content::embedded().unwrap();
        let mut screen = NearTherapyScreen::new();
        assert_eq!(screen.visible(&content).len(), 2);
        screen.show_list();
        assert_eq!(screen.visible(&content).len(), 3);
    }

    #[test]
    fn test_select_keeps_view() {
        let content = Content::embedded().unwrap();
        let mut screen = NearTherapyScreen::new();
        screen.show_list();
        assert!(screen.select(3, &content));
        assert_eq!(screen.selected(), Some(3));
        assert_eq!(screen.view(), LocatorView::List);

        assert!(!screen.select(42, &content));
        assert_eq!(screen.selected(), Some(3));
    }

    #[test]
    fn test_select_at_cursor() {
        let content = Content::embedded().unwrap();
        let mut screen = NearTherapyScreen::new();
        screen.move_cursor(5, &content);
        assert_eq!(screen.cursor(), 1);
        assert!(screen.select_at_cursor(&content));
        assert_eq!(screen.selected(), Some(2));
    }
}
