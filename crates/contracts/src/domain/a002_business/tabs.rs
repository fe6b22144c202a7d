//! Profile tabs as configured by the backend, and the four native tab kinds
//! the profile page knows how to render.

use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Legacy per-section availability flags. Still drives which auxiliary
/// collections the page loader fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableTabs {
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_branches: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_working_hours: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_faqs: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_services: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_media: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_reviews: bool,
}

impl AvailableTabs {
    /// The about bundle (branches, hours, FAQs) is only worth a request when
    /// at least one of its parts exists.
    pub fn needs_about_data(&self) -> bool {
        self.has_branches || self.has_working_hours || self.has_faqs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabType {
    #[default]
    Native,
    Webview,
}

/// Localized tab definition from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessTab {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    pub slug: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub tab_type: TabType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(default)]
    pub webview_url: Option<String>,
}

impl BusinessTab {
    pub fn kind(&self) -> Option<ProfileTab> {
        ProfileTab::from_slug(&self.slug)
    }
}

/// The four content views of the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    About,
    Services,
    Media,
    Reviews,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::About,
        ProfileTab::Services,
        ProfileTab::Media,
        ProfileTab::Reviews,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ProfileTab::About => "about",
            ProfileTab::Services => "services",
            ProfileTab::Media => "media",
            ProfileTab::Reviews => "reviews",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    /// Tabs whose data is fetched on first activation.
    pub fn is_lazy(&self) -> bool {
        !matches!(self, ProfileTab::About)
    }
}

/// Enabled tabs in display order. The sort is stable, so tabs sharing an
/// `order` keep backend order.
pub fn enabled_tabs(tabs: &[BusinessTab]) -> Vec<BusinessTab> {
    let mut enabled: Vec<BusinessTab> = tabs.iter().filter(|t| t.enabled).cloned().collect();
    enabled.sort_by_key(|t| t.order);
    enabled
}

/// Slug of the tab shown first: the first enabled tab in backend order,
/// otherwise `about`.
pub fn default_tab_slug(tabs: &[BusinessTab]) -> String {
    tabs.iter()
        .find(|t| t.enabled)
        .map(|t| t.slug.clone())
        .unwrap_or_else(|| ProfileTab::About.slug().to_string())
}
