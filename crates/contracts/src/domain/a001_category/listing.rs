//! Filter state of the category listing page.
//!
//! The same state is expressed twice: as the browser URL query
//! (`?tag=&verified=true&featured=true&rating=&sort=&page=`) and as the
//! upstream `/categories/{slug}/businesses` query.

use crate::shared::query::QueryString;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Value used by every dropdown to mean "no filter".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSort {
    #[default]
    Rating,
    Newest,
    Views,
    Name,
}

impl ListingSort {
    pub const ALL: [ListingSort; 4] = [
        ListingSort::Rating,
        ListingSort::Newest,
        ListingSort::Views,
        ListingSort::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingSort::Rating => "rating",
            ListingSort::Newest => "newest",
            ListingSort::Views => "views",
            ListingSort::Name => "name",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// The combined verified / featured dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationFilter {
    #[default]
    All,
    Verified,
    Featured,
    Both,
}

impl VerificationFilter {
    pub const ALL: [VerificationFilter; 4] = [
        VerificationFilter::All,
        VerificationFilter::Verified,
        VerificationFilter::Featured,
        VerificationFilter::Both,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationFilter::All => ALL,
            VerificationFilter::Verified => "verified",
            VerificationFilter::Featured => "featured",
            VerificationFilter::Both => "both",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn from_flags(verified: bool, featured: bool) -> Self {
        match (verified, featured) {
            (true, true) => VerificationFilter::Both,
            (true, false) => VerificationFilter::Verified,
            (false, true) => VerificationFilter::Featured,
            (false, false) => VerificationFilter::All,
        }
    }

    pub fn flags(&self) -> (bool, bool) {
        match self {
            VerificationFilter::All => (false, false),
            VerificationFilter::Verified => (true, false),
            VerificationFilter::Featured => (false, true),
            VerificationFilter::Both => (true, true),
        }
    }
}

/// Options of the rating dropdown, best first.
pub const RATING_OPTIONS: [&str; 6] = [ALL, "5", "4", "3", "2", "1"];

/// Which dropdown a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterParam {
    Rating,
    Verification,
    Sort,
}

impl FilterParam {
    /// URL parameter name. The verification dropdown has no parameter of its
    /// own; it writes `verified` / `featured`.
    pub fn param_name(&self) -> &'static str {
        match self {
            FilterParam::Rating => "rating",
            FilterParam::Verification => "filter",
            FilterParam::Sort => "sort",
        }
    }
}

/// Applies a dropdown selection to the current URL query.
pub fn apply_selection(current: &QueryString, param: FilterParam, value: &str) -> QueryString {
    let mut next = current.clone();
    let name = param.param_name();

    if value.is_empty() || value == ALL {
        next.remove(name);
        if param == FilterParam::Verification {
            next.remove("verified").remove("featured");
        }
        return next;
    }

    match param {
        FilterParam::Verification => {
            next.remove(name);
            match VerificationFilter::parse(value) {
                Some(VerificationFilter::Verified) => {
                    next.set("verified", "true").remove("featured");
                }
                Some(VerificationFilter::Featured) => {
                    next.set("featured", "true").remove("verified");
                }
                Some(VerificationFilter::Both) => {
                    next.set("verified", "true").set("featured", "true");
                }
                Some(VerificationFilter::All) | None => {}
            }
        }
        _ => {
            next.set(name, value);
        }
    }
    next
}

/// Parsed category-page state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingFilters {
    pub tag: Option<String>,
    pub verified: bool,
    pub featured: bool,
    pub min_rating: Option<u8>,
    pub sort: ListingSort,
    pub page: u32,
    pub limit: u32,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            tag: None,
            verified: false,
            featured: false,
            min_rating: None,
            sort: ListingSort::default(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListingFilters {
    /// Reads the browser URL query. Unknown or malformed values are ignored.
    pub fn from_query(query: &QueryString) -> Self {
        let min_rating = query
            .get("rating")
            .and_then(|r| r.parse::<f32>().ok())
            .filter(|r| (1.0..=5.0).contains(r))
            .map(|r| r.floor() as u8);

        Self {
            tag: query
                .get("tag")
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            verified: query.get("verified") == Some("true"),
            featured: query.get("featured") == Some("true"),
            min_rating,
            sort: query
                .get("sort")
                .and_then(ListingSort::parse)
                .unwrap_or_default(),
            page: query
                .get("page")
                .and_then(|p| p.parse().ok())
                .filter(|p| *p > 0)
                .unwrap_or(1),
            limit: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn verification(&self) -> VerificationFilter {
        VerificationFilter::from_flags(self.verified, self.featured)
    }

    /// Current value of each dropdown as it appears in its option list.
    pub fn selected_value(&self, param: FilterParam) -> String {
        match param {
            FilterParam::Rating => self
                .min_rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| ALL.to_string()),
            FilterParam::Verification => self.verification().as_str().to_string(),
            FilterParam::Sort => self.sort.as_str().to_string(),
        }
    }

    /// Browser URL query; default values are omitted.
    pub fn to_page_query(&self) -> QueryString {
        let mut q = QueryString::new();
        q.append_opt("tag", self.tag.as_deref());
        if self.verified {
            q.append("verified", "true");
        }
        if self.featured {
            q.append("featured", "true");
        }
        q.append_opt("rating", self.min_rating);
        if self.sort != ListingSort::default() {
            q.append("sort", self.sort.as_str());
        }
        if self.page > 1 {
            q.append("page", self.page);
        }
        q
    }

    /// Dynamic filters as sent upstream; `all` / empty values are dropped.
    pub fn upstream_filters(&self) -> Vec<(String, String)> {
        let mut filters = Vec::new();
        if self.verified {
            filters.push(("verified".to_string(), "true".to_string()));
        }
        if self.featured {
            filters.push(("featured".to_string(), "true".to_string()));
        }
        if let Some(rating) = self.min_rating {
            filters.push(("min_rating".to_string(), rating.to_string()));
        }
        filters
    }

    /// `/categories/{slug}/businesses` query.
    pub fn to_upstream_query(&self) -> QueryString {
        let mut q = QueryString::new();
        q.append("page", self.page.max(1)).append("limit", self.limit);
        for (key, value) in self.upstream_filters() {
            if !value.is_empty() && value != ALL {
                q.append(&key, value);
            }
        }
        q.append("sort", self.sort.as_str());
        if let Some(tag) = &self.tag {
            q.append("tags", tag);
        }
        q
    }

    /// The same filters on the next page.
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }
}

/// Joins several tag slugs the way the upstream `tags` parameter expects.
pub fn join_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_defaults() {
        let filters = ListingFilters::from_query(&QueryString::new());
        assert_eq!(filters, ListingFilters::default());
        assert_eq!(filters.selected_value(FilterParam::Rating), "all");
        assert_eq!(filters.selected_value(FilterParam::Sort), "rating");
    }

    #[test]
    fn test_from_query_parses_all_fields() {
        let q = QueryString::parse("tag=pizza&verified=true&rating=4&sort=views&page=3");
        let filters = ListingFilters::from_query(&q);

        assert_eq!(filters.tag.as_deref(), Some("pizza"));
        assert!(filters.verified);
        assert!(!filters.featured);
        assert_eq!(filters.min_rating, Some(4));
        assert_eq!(filters.sort, ListingSort::Views);
        assert_eq!(filters.page, 3);
        assert_eq!(filters.verification(), VerificationFilter::Verified);
    }

    #[test]
    fn test_malformed_values_ignored() {
        let q = QueryString::parse("rating=9&sort=random&page=0&verified=yes");
        let filters = ListingFilters::from_query(&q);
        assert_eq!(filters.min_rating, None);
        assert_eq!(filters.sort, ListingSort::Rating);
        assert_eq!(filters.page, 1);
        assert!(!filters.verified);
    }

    #[test]
    fn test_upstream_query() {
        let filters = ListingFilters {
            tag: Some("delivery".into()),
            featured: true,
            min_rating: Some(3),
            page: 2,
            ..ListingFilters::default()
        };
        assert_eq!(
            filters.to_upstream_query().to_string(),
            "page=2&limit=20&featured=true&min_rating=3&sort=rating&tags=delivery"
        );
    }

    #[test]
    fn test_page_query_omits_defaults() {
        assert!(ListingFilters::default().to_page_query().is_empty());

        let filters = ListingFilters {
            verified: true,
            sort: ListingSort::Name,
            ..ListingFilters::default()
        };
        assert_eq!(filters.to_page_query().to_string(), "verified=true&sort=name");
        assert_eq!(filters.next_page().to_page_query().get("page"), Some("2"));
    }

    #[test]
    fn test_apply_verification_selection() {
        let q = QueryString::parse("tag=x&verified=true");

        let both = apply_selection(&q, FilterParam::Verification, "both");
        assert_eq!(both.to_string(), "tag=x&verified=true&featured=true");

        let featured = apply_selection(&both, FilterParam::Verification, "featured");
        assert_eq!(featured.to_string(), "tag=x&featured=true");

        let cleared = apply_selection(&featured, FilterParam::Verification, "all");
        assert_eq!(cleared.to_string(), "tag=x");
        assert_eq!(cleared.get("filter"), None);
    }

    #[test]
    fn test_apply_rating_and_sort_selection() {
        let q = QueryString::parse("rating=3");
        let q = apply_selection(&q, FilterParam::Rating, "5");
        let q = apply_selection(&q, FilterParam::Sort, "newest");
        assert_eq!(q.to_string(), "rating=5&sort=newest");

        let q = apply_selection(&q, FilterParam::Rating, ALL);
        assert_eq!(q.to_string(), "sort=newest");
    }

    #[test]
    fn test_join_tags() {
        assert_eq!(join_tags(&[]), None);
        assert_eq!(
            join_tags(&["a".to_string(), "b".to_string()]).as_deref(),
            Some("a,b")
        );
    }
}
