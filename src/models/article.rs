use serde::{Deserialize, Serialize};

/// A journal article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub excerpt: String,
    pub views: u32,
    pub rating: f32,
    pub difficulty: String,
}

impl Article {
    /// Case-insensitive match against title, author and category.
    ///
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.title, &self.author, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            id: 4,
            title: "Postural Assessment in the Digital Age".to_string(),
            author: "Dr. James Wilson, DPT".to_string(),
            date: "Jan 8, 2025".to_string(),
            read_time: "6 min read".to_string(),
            category: "Posture".to_string(),
            excerpt: String::new(),
            views: 756,
            rating: 4.6,
            difficulty: "Beginner".to_string(),
        }
    }

    #[test]
    fn test_query_matches_fields() {
        let a = article();
        assert!(a.matches_query(""));
        assert!(a.matches_query("  "));
        assert!(a.matches_query("digital"));
        assert!(a.matches_query("WILSON"));
        assert!(a.matches_query("posture"));
        assert!(!a.matches_query("stroke"));
    }
}
