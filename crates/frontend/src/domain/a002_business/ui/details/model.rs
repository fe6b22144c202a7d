//! API layer for the business profile

use crate::shared::http::{get_data, get_page, ApiError};
use contracts::domain::a002_business::details::MediaResponse;
use contracts::domain::a003_review::aggregate::{Review, ReviewsResponseDto};
use contracts::domain::a003_review::summary::{ReviewSummary, ReviewSummaryResponse};
use contracts::domain::a006_for_sale::aggregate::{
    ForSaleListingsResponse, ForSaleServicesResponse, ListingsQuery,
};
use contracts::shared::api::Paged;
use contracts::shared::locale::Locale;
use contracts::usecases::u101_business_profile::request::ProfileRoute;
use contracts::usecases::u101_business_profile::response::ProfilePage;

fn business_path(slug: &str, tail: &str) -> String {
    format!("/directories/businesses/{}{}", urlencoding::encode(slug), tail)
}

pub async fn fetch_profile(route: &ProfileRoute, locale: Locale) -> Result<ProfilePage, ApiError> {
    get_page(&route.page_path(locale)).await
}

pub async fn fetch_services(slug: &str, locale: Locale) -> Result<ForSaleServicesResponse, ApiError> {
    get_data(&business_path(slug, "/services"), locale).await
}

pub async fn fetch_for_sale_listings(
    slug: &str,
    query: &ListingsQuery,
    locale: Locale,
) -> Result<ForSaleListingsResponse, ApiError> {
    let path = query
        .to_query()
        .to_url(&business_path(slug, "/forsale-listings"));
    let resp: ForSaleListingsResponse = get_data(&path, locale).await?;
    Ok(resp.with_request(query))
}

pub async fn fetch_media(slug: &str, locale: Locale) -> Result<MediaResponse, ApiError> {
    get_data(&business_path(slug, "/media"), locale).await
}

pub async fn fetch_reviews(
    slug: &str,
    page: u32,
    limit: u32,
    locale: Locale,
) -> Result<Paged<Review>, ApiError> {
    let path = format!(
        "{}?page={}&limit={}",
        business_path(slug, "/reviews"),
        page,
        limit
    );
    let resp: ReviewsResponseDto = get_data(&path, locale).await?;
    Ok(resp.into_page(page, limit))
}

pub async fn fetch_review_summary(slug: &str, locale: Locale) -> Result<ReviewSummary, ApiError> {
    let resp: ReviewSummaryResponse = get_data(&business_path(slug, "/reviews/summary"), locale).await?;
    Ok(resp.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_path_encodes_slug() {
        assert_eq!(
            business_path("café bean", "/media"),
            "/directories/businesses/caf%C3%A9%20bean/media"
        );
    }
}
