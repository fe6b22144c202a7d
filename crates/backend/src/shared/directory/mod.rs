//! Access to the remote directory API.
//!
//! Page loaders only see the [`DirectoryApi`] trait; production wires in
//! [`client::HttpDirectoryClient`] through [`initialize`].

pub mod client;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a001_category::listing::ListingFilters;
use contracts::domain::a002_business::aggregate::Business;
use contracts::domain::a002_business::details::{
    AboutData, Branch, Faq, MediaResponse, WorkingHoursResponse,
};
use contracts::domain::a004_tag::aggregate::Tag;
use contracts::domain::a005_section::aggregate::Section;
use contracts::domain::a007_filter::aggregate::Filter;
use contracts::shared::api::Paged;
use contracts::shared::locale::Locale;
use once_cell::sync::OnceCell;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directory API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unexpected directory API payload: {0}")]
    Decode(String),
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound(_))
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn categories(&self, locale: Locale) -> DirectoryResult<Vec<Category>>;
    async fn category(&self, slug: &str, locale: Locale) -> DirectoryResult<Category>;
    async fn category_businesses(
        &self,
        slug: &str,
        filters: &ListingFilters,
        locale: Locale,
    ) -> DirectoryResult<Paged<Business>>;
    async fn category_tags(&self, slug: &str, locale: Locale) -> DirectoryResult<Vec<Tag>>;
    async fn category_filters(&self, slug: &str, locale: Locale) -> DirectoryResult<Vec<Filter>>;
    /// `Ok(None)` on 404.
    async fn tag(&self, slug: &str, locale: Locale) -> DirectoryResult<Option<Tag>>;
    async fn sections(&self, locale: Locale) -> DirectoryResult<Vec<Section>>;

    async fn business_in_category(
        &self,
        category: &str,
        slug: &str,
        locale: Locale,
    ) -> DirectoryResult<Business>;
    async fn business(&self, slug: &str, locale: Locale) -> DirectoryResult<Business>;
    async fn about(&self, slug: &str, locale: Locale) -> DirectoryResult<AboutData>;
    async fn working_hours(&self, slug: &str, locale: Locale)
        -> DirectoryResult<WorkingHoursResponse>;
    async fn faqs(&self, slug: &str, locale: Locale) -> DirectoryResult<Vec<Faq>>;
    async fn branches(&self, slug: &str, locale: Locale) -> DirectoryResult<Vec<Branch>>;
    async fn media(&self, slug: &str, locale: Locale) -> DirectoryResult<MediaResponse>;
    async fn increment_views(&self, slug: &str) -> DirectoryResult<()>;
}

static DIRECTORY: OnceCell<Arc<dyn DirectoryApi>> = OnceCell::new();

pub fn initialize(api: Arc<dyn DirectoryApi>) -> anyhow::Result<()> {
    DIRECTORY
        .set(api)
        .map_err(|_| anyhow::anyhow!("directory client already initialized"))
}

pub fn get_directory() -> Arc<dyn DirectoryApi> {
    DIRECTORY
        .get()
        .cloned()
        .expect("Directory client has not been initialized")
}
