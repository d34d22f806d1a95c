//! Exercise library: filtered list and exercise detail.

use super::{step_cursor, Back};
use crate::models::{Exercise, ALL_CATEGORIES};
use crate::traits::ContentSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExerciseView {
    #[default]
    List,
    Detail(u32),
}

#[derive(Debug)]
pub struct ExerciseFitScreen {
    view: ExerciseView,
    category: String,
    cursor: usize,
}

impl Default for ExerciseFitScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseFitScreen {
    pub fn new() -> Self {
        Self {
            view: ExerciseView::List,
            category: ALL_CATEGORIES.to_string(),
            cursor: 0,
        }
    }

    pub fn view(&self) -> ExerciseView {
        self.view
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Exercises matching the active category, in content order.
    pub fn filtered<'c>(&self, content: &'c dyn ContentSource) -> Vec<&'c Exercise> {
        content
            .exercises()
            .iter()
            .filter(|e| e.matches_category(&self.category))
            .collect()
    }

    pub fn set_category(&mut self, category: &str) {
        if self.category != category {
            self.category = category.to_string();
            self.cursor = 0;
        }
    }

    /// Step through the category chips, wrapping at either end.
    pub fn cycle_category(&mut self, forward: bool, content: &dyn ContentSource) {
        let categories = content.exercise_categories();
        if categories.is_empty() {
            return;
        }
        let current = categories
            .iter()
            .position(|c| c.id == self.category)
            .unwrap_or(0);
        let len = categories.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let id = categories[next].id.clone();
        self.set_category(&id);
    }

    pub fn move_cursor(&mut self, delta: isize, content: &dyn ContentSource) {
        self.cursor = step_cursor(self.cursor, delta, self.filtered(content).len());
    }

    /// Open the detail view. An id missing from content changes nothing.
    pub fn select(&mut self, id: u32, content: &dyn ContentSource) -> bool {
        if content.exercise(id).is_none() {
            tracing::debug!(id, "exercise not found");
            return false;
        }
        self.view = ExerciseView::Detail(id);
        true
    }

    pub fn open_at_cursor(&mut self, content: &dyn ContentSource) -> bool {
        let id = match self.filtered(content).get(self.cursor) {
            Some(e) => e.id,
            None => return false,
        };
        self.select(id, content)
    }

    /// The exercise shown in detail, if the view is a detail and the id
    /// still resolves.
    pub fn detail<'c>(&self, content: &'c dyn ContentSource) -> Option<&'c Exercise> {
        match self.view {
            ExerciseView::Detail(id) => content.exercise(id),
            ExerciseView::List => None,
        }
    }

    pub fn back(&mut self) -> Back {
        match self.view {
            ExerciseView::Detail(_) => {
                self.view = ExerciseView::List;
                Back::Handled
            }
            ExerciseView::List => Back::Leave,
        }
    }
}
