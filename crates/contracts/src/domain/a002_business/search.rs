//! Free-text search over all businesses.

use crate::shared::query::QueryString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSort {
    #[default]
    Relevance,
    Rating,
    Distance,
    CreatedAt,
}

impl SearchSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSort::Relevance => "relevance",
            SearchSort::Rating => "rating",
            SearchSort::Distance => "distance",
            SearchSort::CreatedAt => "created_at",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [
            SearchSort::Relevance,
            SearchSort::Rating,
            SearchSort::Distance,
            SearchSort::CreatedAt,
        ]
        .into_iter()
        .find(|s| s.as_str() == value)
    }
}

/// `/search/businesses` parameters. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub query: String,
    pub category: Option<String>,
    pub min_rating: Option<f32>,
    pub verified_only: bool,
    pub sort: Option<SearchSort>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl SearchFilters {
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> QueryString {
        let mut q = QueryString::new();
        let text = self.query.trim();
        if !text.is_empty() {
            q.append("q", text);
        }
        q.append_opt("category", self.category.as_deref().filter(|c| !c.is_empty()));
        q.append_opt("min_rating", self.min_rating.filter(|r| *r > 0.0));
        if self.verified_only {
            q.append("verified_only", true);
        }
        q.append_opt("sort", self.sort.map(|s| s.as_str()));
        q.append_opt("page", self.page.filter(|p| *p > 0));
        q.append_opt("limit", self.limit.filter(|l| *l > 0));
        q
    }

    /// Reads the search page URL (`?q=&category=&sort=&page=`).
    pub fn from_page_query(query: &QueryString) -> Self {
        Self {
            query: query.get("q").unwrap_or_default().to_string(),
            category: query.get("category").filter(|c| !c.is_empty()).map(str::to_string),
            min_rating: query.get("min_rating").and_then(|r| r.parse().ok()),
            verified_only: query.get("verified_only") == Some("true"),
            sort: query.get("sort").and_then(SearchSort::parse),
            page: query.get("page").and_then(|p| p.parse().ok()),
            limit: None,
        }
    }
}

/// Navbar search target: `/{locale}/search?q=...`, or `None` for blank input.
pub fn search_href(locale: crate::shared::locale::Locale, input: &str) -> Option<String> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }
    let mut q = QueryString::new();
    q.append("q", text);
    Some(q.to_url(&format!("/{}/search", locale)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::locale::Locale;

    #[test]
    fn test_only_set_params_are_sent() {
        assert!(SearchFilters::default().to_query().is_empty());

        let filters = SearchFilters {
            query: " sushi ".into(),
            category: Some("restaurants".into()),
            min_rating: Some(4.0),
            verified_only: true,
            sort: Some(SearchSort::CreatedAt),
            page: Some(2),
            limit: Some(10),
        };
        assert_eq!(
            filters.to_query().to_string(),
            "q=sushi&category=restaurants&min_rating=4&verified_only=true&sort=created_at&page=2&limit=10"
        );
    }

    #[test]
    fn test_page_query_roundtrip() {
        let q = QueryString::parse("q=cafe&sort=rating&page=3");
        let filters = SearchFilters::from_page_query(&q);
        assert_eq!(filters.query, "cafe");
        assert_eq!(filters.sort, Some(SearchSort::Rating));
        assert_eq!(filters.page, Some(3));
        assert!(!filters.verified_only);
    }

    #[test]
    fn test_search_href() {
        assert_eq!(search_href(Locale::En, "   "), None);
        assert_eq!(
            search_href(Locale::Ar, "coffee shop").as_deref(),
            Some("/ar/search?q=coffee+shop")
        );
    }
}
