//! Featured sections of the directories home (`GET /sections`).

use crate::domain::a002_business::aggregate::Business;
use crate::domain::a002_business::dto::BusinessDto;
use crate::shared::locale::Locale;
use crate::shared::query::QueryString;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a section's "view all" link points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionCta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category_slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters: BTreeMap<String, String>,
}

impl SectionCta {
    /// Category listing URL carrying the CTA tag and filters, `None` when
    /// the CTA names no category.
    pub fn listing_href(&self, locale: Locale) -> Option<String> {
        let category = self.category_slug.as_deref().filter(|s| !s.is_empty())?;
        let mut query = QueryString::new();
        if let Some(tag) = self.tags.iter().find(|t| !t.is_empty()) {
            query.append("tag", tag);
        }
        for (key, value) in &self.filters {
            if !value.is_empty() {
                query.set(key, value);
            }
        }
        Some(query.to_url(&format!("/{}/directories/{}", locale, category)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub title_ar: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_order: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_limit: u32,
    #[serde(default)]
    pub display_title: Option<String>,
    #[serde(default)]
    pub display_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cta: SectionCta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub businesses: Vec<BusinessDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<SectionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub title: String,
    pub title_ar: Option<String>,
    pub background_color: Option<String>,
    pub display_order: i32,
    pub business_limit: u32,
    pub display_title: String,
    pub display_description: String,
    pub cta: SectionCta,
    pub businesses: Vec<Business>,
}

impl From<SectionDto> for Section {
    fn from(dto: SectionDto) -> Self {
        Self {
            id: dto.id,
            display_title: dto
                .display_title
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| dto.title.clone()),
            display_description: dto.display_description.unwrap_or_default(),
            title: dto.title,
            title_ar: dto.title_ar,
            background_color: dto.background_color,
            display_order: dto.display_order,
            business_limit: dto.business_limit,
            cta: dto.cta,
            businesses: dto.businesses.into_iter().map(Business::from).collect(),
        }
    }
}

impl Section {
    pub fn heading(&self, locale: Locale) -> &str {
        locale
            .pick_opt(Some(self.display_title.as_str()), self.title_ar.as_deref())
            .unwrap_or(self.title.as_str())
    }

    pub fn cta_label(&self, locale: Locale) -> &str {
        self.cta
            .title
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| locale.pick("View all", "عرض الكل"))
    }
}

/// Sections by display order, skipping empty ones.
pub fn visible_sections(sections: Vec<SectionDto>) -> Vec<Section> {
    let mut sections: Vec<Section> = sections
        .into_iter()
        .map(Section::from)
        .filter(|s| !s.businesses.is_empty())
        .collect();
    sections.sort_by_key(|s| s.display_order);
    sections
}
