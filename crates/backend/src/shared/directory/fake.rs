//! In-memory [`DirectoryApi`] for page loader tests.

use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a001_category::listing::ListingFilters;
use contracts::domain::a002_business::aggregate::Business;
use contracts::domain::a002_business::details::{
    AboutData, Branch, BusinessMedia, Faq, MediaResponse, WorkingHours, WorkingHoursResponse,
};
use contracts::domain::a002_business::dto::BusinessDto;
use contracts::domain::a002_business::tabs::AvailableTabs;
use contracts::domain::a004_tag::aggregate::Tag;
use contracts::domain::a005_section::aggregate::Section;
use contracts::domain::a007_filter::aggregate::Filter;
use contracts::shared::api::Paged;
use contracts::shared::locale::Locale;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Mutex;

use super::{DirectoryApi, DirectoryError, DirectoryResult};

#[derive(Default)]
pub struct FakeDirectory {
    pub business: Option<Business>,
    pub about: AboutData,
    pub hours: Vec<WorkingHours>,
    pub faqs: Vec<Faq>,
    pub branches: Vec<Branch>,
    pub media: Vec<BusinessMedia>,
    pub categories: Vec<Category>,
    pub category: Option<Category>,
    pub businesses: Paged<Business>,
    pub tags: Vec<Tag>,
    pub tag: Option<Tag>,
    pub filters: Vec<Filter>,
    pub sections: Vec<Section>,
    /// Method names that answer with a 500.
    pub failing: HashSet<&'static str>,
    pub calls: Mutex<Vec<String>>,
    pub last_filters: Mutex<Option<ListingFilters>>,
}

impl FakeDirectory {
    pub fn failing(mut self, method: &'static str) -> Self {
        self.failing.insert(method);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn called(&self, method: &str) -> bool {
        self.calls().iter().any(|c| c == method)
    }

    fn record(&self, method: &'static str) -> DirectoryResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(method.to_string());
        }
        if self.failing.contains(method) {
            return Err(DirectoryError::Status {
                status: 500,
                message: format!("{} failed", method),
            });
        }
        Ok(())
    }
}

pub fn business_with(available: AvailableTabs) -> Business {
    let dto: BusinessDto = serde_json::from_value(json!({
        "id": 1,
        "name": "Bean",
        "slug": "bean",
        "category_slug": "cafes",
        "rating": { "average": 4.0, "count": 3 },
        "available_tabs": available,
    }))
    .unwrap();
    dto.into()
}

pub fn category(slug: &str) -> Category {
    serde_json::from_value(json!({ "id": 2, "slug": slug, "name": "Cafes", "name_ar": "مقاهي" }))
        .unwrap()
}

pub fn tag(slug: &str) -> Tag {
    serde_json::from_value(json!({ "id": 3, "slug": slug, "name": slug, "type": "feature" }))
        .unwrap()
}

pub fn faq(id: i64, order: i32, active: bool) -> Faq {
    serde_json::from_value(json!({
        "id": id,
        "business_id": 1,
        "question": format!("q{}", id),
        "answer": format!("a{}", id),
        "display_order": order,
        "is_active": active,
    }))
    .unwrap()
}

pub fn hours(day: u8) -> WorkingHours {
    serde_json::from_value(json!({
        "id": day,
        "business_id": 1,
        "day": day,
        "open_time": "09:00",
        "close_time": "22:00",
        "is_closed": false,
    }))
    .unwrap()
}

pub fn media(id: i64) -> BusinessMedia {
    serde_json::from_value(json!({
        "id": id,
        "business_id": 1,
        "type": "image",
        "url": format!("https://cdn.example.com/{}.jpg", id),
    }))
    .unwrap()
}

#[async_trait]
impl DirectoryApi for FakeDirectory {
    async fn categories(&self, _locale: Locale) -> DirectoryResult<Vec<Category>> {
        self.record("categories")?;
        Ok(self.categories.clone())
    }

    async fn category(&self, slug: &str, _locale: Locale) -> DirectoryResult<Category> {
        self.record("category")?;
        self.category
            .clone()
            .ok_or_else(|| DirectoryError::NotFound(slug.to_string()))
    }

    async fn category_businesses(
        &self,
        _slug: &str,
        filters: &ListingFilters,
        _locale: Locale,
    ) -> DirectoryResult<Paged<Business>> {
        self.record("category_businesses")?;
        if let Ok(mut last) = self.last_filters.lock() {
            *last = Some(filters.clone());
        }
        Ok(self.businesses.clone())
    }

    async fn category_tags(&self, _slug: &str, _locale: Locale) -> DirectoryResult<Vec<Tag>> {
        self.record("category_tags")?;
        Ok(self.tags.clone())
    }

    async fn category_filters(&self, _slug: &str, _locale: Locale) -> DirectoryResult<Vec<Filter>> {
        self.record("category_filters")?;
        Ok(self.filters.clone())
    }

    async fn tag(&self, _slug: &str, _locale: Locale) -> DirectoryResult<Option<Tag>> {
        self.record("tag")?;
        Ok(self.tag.clone())
    }

    async fn sections(&self, _locale: Locale) -> DirectoryResult<Vec<Section>> {
        self.record("sections")?;
        Ok(self.sections.clone())
    }

    async fn business_in_category(
        &self,
        _category: &str,
        slug: &str,
        _locale: Locale,
    ) -> DirectoryResult<Business> {
        self.record("business_in_category")?;
        self.business
            .clone()
            .ok_or_else(|| DirectoryError::NotFound(slug.to_string()))
    }

    async fn business(&self, slug: &str, _locale: Locale) -> DirectoryResult<Business> {
        self.record("business")?;
        self.business
            .clone()
            .ok_or_else(|| DirectoryError::NotFound(slug.to_string()))
    }

    async fn about(&self, _slug: &str, _locale: Locale) -> DirectoryResult<AboutData> {
        self.record("about")?;
        Ok(self.about.clone())
    }

    async fn working_hours(
        &self,
        _slug: &str,
        _locale: Locale,
    ) -> DirectoryResult<WorkingHoursResponse> {
        self.record("working_hours")?;
        Ok(WorkingHoursResponse {
            working_hours: self.hours.clone(),
            is_open: true,
            status_text: "Open now".into(),
        })
    }

    async fn faqs(&self, _slug: &str, _locale: Locale) -> DirectoryResult<Vec<Faq>> {
        self.record("faqs")?;
        Ok(self.faqs.clone())
    }

    async fn branches(&self, _slug: &str, _locale: Locale) -> DirectoryResult<Vec<Branch>> {
        self.record("branches")?;
        Ok(self.branches.clone())
    }

    async fn media(&self, _slug: &str, _locale: Locale) -> DirectoryResult<MediaResponse> {
        self.record("media")?;
        Ok(MediaResponse {
            total: self.media.len() as u64,
            media: self.media.clone(),
        })
    }

    async fn increment_views(&self, _slug: &str) -> DirectoryResult<()> {
        self.record("increment_views")
    }
}
