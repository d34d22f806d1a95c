//! Article reader: article list and article detail.
//!
//! The list shows the first article as a featured card and the rest below
//! it. Once a search query or category is active the featured card is
//! dropped and every matching article is listed.

use std::collections::BTreeSet;

use super::{step_cursor, Back};
use crate::models::Article;
use crate::traits::ContentSource;

/// Related articles shown under a detail view.
const RELATED_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleView {
    #[default]
    ArticleList,
    ArticleDetail(u32),
}

#[derive(Debug, Default)]
pub struct JournalLinkScreen {
    view: ArticleView,
    bookmarks: BTreeSet<u32>,
    query: String,
    searching: bool,
    /// Index into the content's article categories; 0 is "All"
    category: usize,
    cursor: usize,
}

impl JournalLinkScreen {
    pub fn new(content: &dyn ContentSource) -> Self {
        Self {
            bookmarks: content.default_bookmarks().iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> ArticleView {
        self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn category_index(&self) -> usize {
        self.category
    }

    pub fn is_bookmarked(&self, id: u32) -> bool {
        self.bookmarks.contains(&id)
    }

    pub fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn toggle_bookmark(&mut self, id: u32) {
        if !self.bookmarks.remove(&id) {
            self.bookmarks.insert(id);
        }
    }

    fn category_filter<'c>(&self, content: &'c dyn ContentSource) -> Option<&'c str> {
        match self.category {
            0 => None,
            i => content.article_categories().get(i).map(String::as_str),
        }
    }

    fn is_filtered(&self) -> bool {
        !self.query.trim().is_empty() || self.category != 0
    }

    /// Featured card, shown only while no filter is active.
    pub fn featured<'c>(&self, content: &'c dyn ContentSource) -> Option<&'c Article> {
        if self.is_filtered() {
            None
        } else {
            content.articles().first()
        }
    }

    /// Articles listed under the featured card (or all matches when filtered).
    pub fn listed<'c>(&self, content: &'c dyn ContentSource) -> Vec<&'c Article> {
        if !self.is_filtered() {
            return content.articles().iter().skip(1).collect();
        }
        let category = self.category_filter(content);
        content
            .articles()
            .iter()
            .filter(|a| category.map_or(true, |c| a.category == c))
            .filter(|a| a.matches_query(&self.query))
            .collect()
    }

    /// Featured card (if any) followed by the list, in display order.
    fn selectable<'c>(&self, content: &'c dyn ContentSource) -> Vec<&'c Article> {
        let mut all: Vec<&Article> = self.featured(content).into_iter().collect();
        all.extend(self.listed(content));
        all
    }

    pub fn move_cursor(&mut self, delta: isize, content: &dyn ContentSource) {
        self.cursor = step_cursor(self.cursor, delta, self.selectable(content).len());
    }

    pub fn article_at_cursor<'c>(&self, content: &'c dyn ContentSource) -> Option<&'c Article> {
        self.selectable(content).get(self.cursor).copied()
    }

    pub fn cycle_category(&mut self, forward: bool, content: &dyn ContentSource) {
        let len = content.article_categories().len();
        if len == 0 {
            return;
        }
        self.category = if forward {
            (self.category + 1) % len
        } else {
            (self.category + len - 1) % len
        };
        self.cursor = 0;
    }

    pub fn start_search(&mut self) {
        self.searching = true;
    }

    pub fn stop_search(&mut self) {
        self.searching = false;
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }

    /// Open an article. Unknown ids change nothing.
    pub fn open(&mut self, id: u32, content: &dyn ContentSource) -> bool {
        if content.article(id).is_none() {
            return false;
        }
        self.searching = false;
        self.view = ArticleView::ArticleDetail(id);
        true
    }

    pub fn open_at_cursor(&mut self, content: &dyn ContentSource) -> bool {
        match self.article_at_cursor(content) {
            Some(a) => {
                let id = a.id;
                self.open(id, content)
            }
            None => false,
        }
    }

    pub fn detail<'c>(&self, content: &'c dyn ContentSource) -> Option<&'c Article> {
        match self.view {
            ArticleView::ArticleDetail(id) => content.article(id),
            ArticleView::ArticleList => None,
        }
    }

    /// Up to two other articles, in content order.
    pub fn related<'c>(&self, content: &'c dyn ContentSource) -> Vec<&'c Article> {
        let ArticleView::ArticleDetail(id) = self.view else {
            return Vec::new();
        };
        content
            .articles()
            .iter()
            .filter(|a| a.id != id)
            .take(RELATED_LEN)
            .collect()
    }

    pub fn back(&mut self) -> Back {
        match self.view {
            ArticleView::ArticleDetail(_) => {
                self.view = ArticleView::ArticleList;
                Back::Handled
            }
            ArticleView::ArticleList => Back::Leave,
        }
    }
}
