use crate::shared::locale::Locale;
use serde::{Deserialize, Serialize};

/// The two URL shapes a profile is reachable by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum ProfileRoute {
    /// `/{locale}/directories/{category}/{slug}`: the record comes from
    /// `/categories/{category}/{slug}` and the about tab from one bundle.
    Category { category: String, slug: String },
    /// `/{locale}/directories/businesses/{slug}`: every collection is
    /// fetched separately.
    Direct { slug: String },
}

impl ProfileRoute {
    pub fn slug(&self) -> &str {
        match self {
            ProfileRoute::Category { slug, .. } | ProfileRoute::Direct { slug } => slug,
        }
    }

    /// Directory API path of the business record.
    pub fn business_path(&self) -> String {
        match self {
            ProfileRoute::Category { category, slug } => {
                format!("/categories/{}/{}", category, slug)
            }
            ProfileRoute::Direct { slug } => format!("/directories/businesses/{}", slug),
        }
    }

    /// Backend page endpoint serving this route.
    pub fn page_path(&self, locale: Locale) -> String {
        let path = match self {
            ProfileRoute::Category { category, slug } => {
                format!("/api/pages/businesses/{}/{}", category, slug)
            }
            ProfileRoute::Direct { slug } => format!("/api/pages/businesses/{}", slug),
        };
        format!("{}?locale={}", path, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        let by_category = ProfileRoute::Category {
            category: "restaurants".into(),
            slug: "bean".into(),
        };
        assert_eq!(by_category.business_path(), "/categories/restaurants/bean");
        assert_eq!(
            by_category.page_path(Locale::En),
            "/api/pages/businesses/restaurants/bean?locale=en"
        );

        let direct = ProfileRoute::Direct { slug: "bean".into() };
        assert_eq!(direct.slug(), "bean");
        assert_eq!(direct.business_path(), "/directories/businesses/bean");
        assert_eq!(direct.page_path(Locale::Ar), "/api/pages/businesses/bean?locale=ar");
    }
}
