//! In-memory [`PresentationHost`] used by the terminal front end.

use std::collections::BTreeMap;

use crate::traits::PresentationHost;

/// Stores hints for the renderer to read.
///
/// Also counts writes and layout requests so callers can tell how often the
/// adapter touched each hint.
#[derive(Debug, Default, Clone)]
pub struct HintStore {
    dark: bool,
    hints: BTreeMap<String, String>,
    writes: BTreeMap<String, usize>,
    layout_requests: u64,
    layout_pending: bool,
}

impl HintStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// How many times `name` has been written.
    pub fn write_count(&self, name: &str) -> usize {
        self.writes.get(name).copied().unwrap_or(0)
    }

    /// Total layout requests received.
    pub fn layout_requests(&self) -> u64 {
        self.layout_requests
    }

    /// Consume an outstanding layout request.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_pending)
    }

    pub fn hints(&self) -> impl Iterator<Item = (&str, &str)> {
        self.hints.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl PresentationHost for HintStore {
    fn set_dark_class(&mut self, enabled: bool) {
        self.dark = enabled;
    }

    fn has_hint(&self, name: &str) -> bool {
        self.hints.contains_key(name)
    }

    fn set_hint(&mut self, name: &str, content: &str) {
        *self.writes.entry(name.to_string()).or_insert(0) += 1;
        self.hints.insert(name.to_string(), content.to_string());
    }

    fn hint(&self, name: &str) -> Option<&str> {
        self.hints.get(name).map(String::as_str)
    }

    fn request_layout(&mut self) {
        self.layout_requests += 1;
        self.layout_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_hint() {
        let mut store = HintStore::new();
        assert!(!store.has_hint("theme-color"));
        store.set_hint("theme-color", "#ffffff");
        assert_eq!(store.hint("theme-color"), Some("#ffffff"));
        store.set_hint("theme-color", "#0f172a");
        assert_eq!(store.hint("theme-color"), Some("#0f172a"));
        assert_eq!(store.write_count("theme-color"), 2);
    }

    #[test]
    fn test_layout_request_is_consumed_once() {
        let mut store = HintStore::new();
        store.request_layout();
        store.request_layout();
        assert_eq!(store.layout_requests(), 2);
        assert!(store.take_layout_request());
        assert!(!store.take_layout_request());
    }
}
