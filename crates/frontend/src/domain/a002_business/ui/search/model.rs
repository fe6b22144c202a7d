//! API layer and URL helpers for the search page

use crate::shared::components::filter_dropdown::SelectOption;
use crate::shared::http::{get_data, ApiError};
use crate::shared::i18n::Msg;
use contracts::domain::a002_business::aggregate::Business;
use contracts::domain::a002_business::dto::{BusinessListResponse, ListingBusinessDto};
use contracts::domain::a002_business::search::{SearchFilters, SearchSort};
use contracts::shared::api::Paged;
use contracts::shared::locale::Locale;
use contracts::shared::query::QueryString;

pub const SEARCH_PAGE_SIZE: u32 = 20;

pub async fn search_businesses(
    filters: &SearchFilters,
    locale: Locale,
) -> Result<Paged<Business>, ApiError> {
    let page = filters.page.unwrap_or(1);
    let limit = filters.limit.unwrap_or(SEARCH_PAGE_SIZE);
    let path = filters.to_query().to_url("/search/businesses");
    let resp: BusinessListResponse<ListingBusinessDto> = get_data(&path, locale).await?;
    Ok(resp.into_page(page, limit))
}

pub fn sort_options(locale: Locale) -> Vec<SelectOption> {
    [
        (SearchSort::Relevance, Msg::SortRelevance),
        (SearchSort::Rating, Msg::SortRating),
        (SearchSort::Distance, Msg::SortDistance),
        (SearchSort::CreatedAt, Msg::SortNewest),
    ]
    .into_iter()
    .map(|(sort, msg)| (sort.as_str().to_string(), msg.text(locale).to_string()))
    .collect()
}

/// Search URL with another sort; paging starts over.
pub fn sort_href(path: &str, query: &QueryString, sort: &str) -> String {
    let mut q = query.clone();
    match SearchSort::parse(sort) {
        Some(SearchSort::Relevance) | None => q.remove("sort"),
        Some(s) => q.set("sort", s.as_str()),
    };
    q.remove("page");
    q.to_url(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_href_resets_page() {
        let query = QueryString::parse("?q=sushi&page=3");
        assert_eq!(
            sort_href("/en/search", &query, "rating"),
            "/en/search?q=sushi&sort=rating"
        );
        let query = QueryString::parse("?q=sushi&sort=rating");
        assert_eq!(sort_href("/en/search", &query, "relevance"), "/en/search?q=sushi");
    }

    #[test]
    fn test_sort_options_cover_every_sort() {
        let values: Vec<String> = sort_options(Locale::En).into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["relevance", "rating", "distance", "created_at"]);
    }
}
