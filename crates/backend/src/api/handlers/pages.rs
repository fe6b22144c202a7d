use axum::extract::{Path, Query, RawQuery};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_category::listing::ListingFilters;
use contracts::shared::locale::Locale;
use contracts::shared::query::QueryString;
use contracts::usecases::u101_business_profile::request::ProfileRoute;
use contracts::usecases::u101_business_profile::response::ProfilePage;
use contracts::usecases::u102_category_listing::response::CategoryPage;
use contracts::usecases::u103_directories_home::response::DirectoriesPage;
use serde::Deserialize;

use crate::shared::directory::{get_directory, DirectoryError};
use crate::usecases;

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

impl LocaleQuery {
    fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .map(Locale::from_segment)
            .unwrap_or_default()
    }
}

/// Unknown page → 404, anything else upstream → 502.
fn status_of(context: &str, e: &DirectoryError) -> StatusCode {
    match e {
        DirectoryError::NotFound(_) => {
            tracing::info!("{}: {}", context, e);
            StatusCode::NOT_FOUND
        }
        _ => {
            tracing::error!("{}: {}", context, e);
            StatusCode::BAD_GATEWAY
        }
    }
}

/// GET /api/pages/directories
pub async fn directories_home(
    Query(query): Query<LocaleQuery>,
) -> Result<Json<DirectoriesPage>, StatusCode> {
    let api = get_directory();
    usecases::u103_directories_home::load_directories(api.as_ref(), query.locale())
        .await
        .map(Json)
        .map_err(|e| status_of("directories home", &e))
}

/// GET /api/pages/directories/:category
///
/// Takes the same query as the browser URL (`tag`, `verified`, `featured`,
/// `rating`, `sort`, `page`) plus `locale`.
pub async fn category_listing(
    Path(category): Path<String>,
    RawQuery(raw): RawQuery,
) -> Result<Json<CategoryPage>, StatusCode> {
    let query = QueryString::parse(raw.as_deref().unwrap_or_default());
    let locale = query
        .get("locale")
        .map(Locale::from_segment)
        .unwrap_or_default();
    let filters = ListingFilters::from_query(&query);

    let api = get_directory();
    usecases::u102_category_listing::load_category(api.as_ref(), &category, filters, locale)
        .await
        .map(Json)
        .map_err(|e| status_of(&format!("category {}", category), &e))
}

/// GET /api/pages/businesses/:category/:slug
pub async fn business_in_category(
    Path((category, slug)): Path<(String, String)>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<ProfilePage>, StatusCode> {
    load_profile(ProfileRoute::Category { category, slug }, query.locale()).await
}

/// GET /api/pages/businesses/:slug
pub async fn business(
    Path(slug): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<ProfilePage>, StatusCode> {
    load_profile(ProfileRoute::Direct { slug }, query.locale()).await
}

async fn load_profile(route: ProfileRoute, locale: Locale) -> Result<Json<ProfilePage>, StatusCode> {
    usecases::u101_business_profile::load_profile(get_directory(), &route, locale)
        .await
        .map(Json)
        .map_err(|e| status_of(&format!("business {}", route.slug()), &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_query_defaults_to_arabic() {
        assert_eq!(LocaleQuery { locale: None }.locale(), Locale::Ar);
        assert_eq!(LocaleQuery { locale: Some("fr".into()) }.locale(), Locale::Ar);
        assert_eq!(LocaleQuery { locale: Some("en".into()) }.locale(), Locale::En);
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            status_of("t", &DirectoryError::NotFound("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(
                "t",
                &DirectoryError::Status {
                    status: 500,
                    message: String::new()
                }
            ),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of("t", &DirectoryError::Decode("bad".into())),
            StatusCode::BAD_GATEWAY
        );
    }
}
