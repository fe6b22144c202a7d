//! API layer for the category listing

use crate::shared::http::{get_data, get_page, ApiError};
use contracts::domain::a001_category::listing::ListingFilters;
use contracts::domain::a002_business::aggregate::Business;
use contracts::domain::a002_business::dto::{BusinessListResponse, ListingBusinessDto};
use contracts::shared::api::Paged;
use contracts::shared::locale::Locale;
use contracts::usecases::u102_category_listing::request::page_path;
use contracts::usecases::u102_category_listing::response::CategoryPage;

pub async fn fetch_page(
    category: &str,
    filters: &ListingFilters,
    locale: Locale,
) -> Result<CategoryPage, ApiError> {
    let slug = urlencoding::encode(category);
    get_page(&page_path(&slug, filters, locale)).await
}

/// Next page of businesses straight from the directory API ("load more").
pub async fn fetch_businesses(
    category: &str,
    filters: &ListingFilters,
    locale: Locale,
) -> Result<Paged<Business>, ApiError> {
    let path = filters.to_upstream_query().to_url(&format!(
        "/categories/{}/businesses",
        urlencoding::encode(category)
    ));
    let resp: BusinessListResponse<ListingBusinessDto> = get_data(&path, locale).await?;
    Ok(resp.into_page(filters.page, filters.limit))
}
