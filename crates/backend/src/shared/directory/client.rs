use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{
    CategoriesResponse, Category, CategoryResponse,
};
use contracts::domain::a001_category::listing::ListingFilters;
use contracts::domain::a002_business::aggregate::Business;
use contracts::domain::a002_business::details::{
    AboutData, AboutResponse, Branch, Faq, FaqsResponse, MediaResponse, WorkingHoursResponse,
};
use contracts::domain::a002_business::dto::{BusinessDto, BusinessListResponse, ListingBusinessDto};
use contracts::domain::a004_tag::aggregate::{Tag, TagResponse};
use contracts::domain::a005_section::aggregate::{visible_sections, Section, SectionsResponse};
use contracts::domain::a007_filter::aggregate::{active_filters, Filter, FiltersResponse};
use contracts::shared::api::{ApiEnvelope, ApiErrorBody, Paged};
use contracts::shared::locale::{Locale, ACCEPT_LANGUAGE_HEADER, LANGUAGE_HEADER};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::{DirectoryApi, DirectoryError, DirectoryResult};
use crate::shared::config::DirectoryApiConfig;

/// `DirectoryApi` over HTTP with the device headers the upstream requires.
pub struct HttpDirectoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDirectoryClient {
    pub fn new(config: &DirectoryApiConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in [
            ("device-id", &config.device_id),
            ("device-type", &config.device_type),
            ("version-number", &config.version_number),
            ("application-source", &config.application_source),
        ] {
            headers.insert(HeaderName::from_static(name), HeaderValue::from_str(value)?);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET returning the raw JSON body. 404 becomes [`DirectoryError::NotFound`].
    async fn get_json<T: DeserializeOwned>(&self, path: &str, locale: Locale) -> DirectoryResult<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(LANGUAGE_HEADER, locale.as_str())
            .header(ACCEPT_LANGUAGE_HEADER, locale.as_str())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Failed to decode {}: {}", path, e);
            DirectoryError::Decode(format!("{}: {}", path, e))
        })
    }

    /// GET unwrapping the `{ data, message }` envelope; `null` data maps to
    /// the default value.
    async fn get_data<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        locale: Locale,
    ) -> DirectoryResult<T> {
        let envelope: ApiEnvelope<T> = self.get_json(path, locale).await?;
        Ok(envelope.into_data_or_default())
    }

    /// Same as [`Self::get_data`] but a `null` payload is an error.
    async fn get_required<T: DeserializeOwned>(&self, path: &str, locale: Locale) -> DirectoryResult<T> {
        let envelope: ApiEnvelope<T> = self.get_json(path, locale).await?;
        envelope
            .data
            .ok_or_else(|| DirectoryError::Decode(format!("{}: empty data", path)))
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.text().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

fn seg(s: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(s)
}

/// `/tags/{slug}` answers with `{ "tag": .. }`; newer deployments wrap it in
/// the usual envelope.
#[derive(Deserialize)]
struct TagLookup {
    #[serde(default)]
    tag: Option<Tag>,
    #[serde(default)]
    data: Option<TagResponse>,
}

#[async_trait]
impl DirectoryApi for HttpDirectoryClient {
    async fn categories(&self, locale: Locale) -> DirectoryResult<Vec<Category>> {
        let resp: CategoriesResponse = self.get_data("/categories", locale).await?;
        Ok(resp.categories)
    }

    async fn category(&self, slug: &str, locale: Locale) -> DirectoryResult<Category> {
        let resp: CategoryResponse = self
            .get_required(&format!("/categories/{}", seg(slug)), locale)
            .await?;
        Ok(resp.category)
    }

    async fn category_businesses(
        &self,
        slug: &str,
        filters: &ListingFilters,
        locale: Locale,
    ) -> DirectoryResult<Paged<Business>> {
        let path = filters
            .to_upstream_query()
            .to_url(&format!("/categories/{}/businesses", seg(slug)));
        let resp: BusinessListResponse<ListingBusinessDto> = self.get_data(&path, locale).await?;
        Ok(resp.into_page(filters.page, filters.limit))
    }

    async fn category_tags(&self, slug: &str, locale: Locale) -> DirectoryResult<Vec<Tag>> {
        self.get_data(&format!("/categories/{}/tags", seg(slug)), locale)
            .await
    }

    async fn category_filters(&self, slug: &str, locale: Locale) -> DirectoryResult<Vec<Filter>> {
        let resp: FiltersResponse = self
            .get_data(&format!("/categories/{}/filters", seg(slug)), locale)
            .await?;
        Ok(active_filters(resp.filters))
    }

    async fn tag(&self, slug: &str, locale: Locale) -> DirectoryResult<Option<Tag>> {
        match self
            .get_json::<TagLookup>(&format!("/tags/{}", seg(slug)), locale)
            .await
        {
            Ok(lookup) => Ok(lookup.tag.or(lookup.data.and_then(|d| d.tag))),
            Err(DirectoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn sections(&self, locale: Locale) -> DirectoryResult<Vec<Section>> {
        let resp: SectionsResponse = self.get_data("/sections", locale).await?;
        Ok(visible_sections(resp.sections))
    }

    async fn business_in_category(
        &self,
        category: &str,
        slug: &str,
        locale: Locale,
    ) -> DirectoryResult<Business> {
        let dto: BusinessDto = self
            .get_required(&format!("/categories/{}/{}", seg(category), seg(slug)), locale)
            .await?;
        Ok(dto.into())
    }

    async fn business(&self, slug: &str, locale: Locale) -> DirectoryResult<Business> {
        let dto: BusinessDto = self
            .get_required(&format!("/directories/businesses/{}", seg(slug)), locale)
            .await?;
        Ok(dto.into())
    }

    async fn about(&self, slug: &str, locale: Locale) -> DirectoryResult<AboutData> {
        let resp: AboutResponse = self
            .get_data(&format!("/directories/businesses/{}/about", seg(slug)), locale)
            .await?;
        Ok(resp.into())
    }

    async fn working_hours(
        &self,
        slug: &str,
        locale: Locale,
    ) -> DirectoryResult<WorkingHoursResponse> {
        self.get_data(
            &format!("/directories/businesses/{}/working-hours", seg(slug)),
            locale,
        )
        .await
    }

    async fn faqs(&self, slug: &str, locale: Locale) -> DirectoryResult<Vec<Faq>> {
        let resp: FaqsResponse = self
            .get_data(&format!("/directories/businesses/{}/faqs", seg(slug)), locale)
            .await?;
        Ok(resp.faqs)
    }

    async fn branches(&self, slug: &str, locale: Locale) -> DirectoryResult<Vec<Branch>> {
        self.get_data(&format!("/directories/businesses/{}/branches", seg(slug)), locale)
            .await
    }

    async fn media(&self, slug: &str, locale: Locale) -> DirectoryResult<MediaResponse> {
        self.get_data(&format!("/directories/businesses/{}/media", seg(slug)), locale)
            .await
    }

    async fn increment_views(&self, slug: &str) -> DirectoryResult<()> {
        let url = self.url(&format!(
            "/directories/businesses/{}/increment-views",
            seg(slug)
        ));
        let response = self.client.post(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                message: String::new(),
            });
        }
        Ok(())
    }
}
