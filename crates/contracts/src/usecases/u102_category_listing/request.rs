use crate::domain::a001_category::listing::ListingFilters;
use crate::shared::locale::Locale;

/// Backend page endpoint of a category listing with the given filter state.
pub fn page_path(category: &str, filters: &ListingFilters, locale: Locale) -> String {
    let mut query = filters.to_page_query();
    query.set("locale", locale);
    query.to_url(&format!("/api/pages/directories/{}", category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::listing::ListingSort;

    #[test]
    fn test_page_path_keeps_filters() {
        let filters = ListingFilters {
            verified: true,
            sort: ListingSort::Newest,
            page: 2,
            ..Default::default()
        };
        assert_eq!(
            page_path("cafes", &filters, Locale::En),
            "/api/pages/directories/cafes?verified=true&sort=newest&page=2&locale=en"
        );
        assert_eq!(
            page_path("cafes", &ListingFilters::default(), Locale::Ar),
            "/api/pages/directories/cafes?locale=ar"
        );
    }
}
