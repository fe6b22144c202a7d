use super::tabs::{AvailableTabs, BusinessTab};
use crate::domain::a004_tag::aggregate::Tag;
use crate::shared::locale::Locale;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Value objects
// ============================================================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, deserialize_with = "null_as_default")]
    pub average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

impl Rating {
    /// One decimal, the way the cards and the sidebar show it.
    pub fn display_average(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// Number of filled stars out of five (rounded to nearest).
    pub fn filled_stars(&self) -> u8 {
        self.average.round().clamp(0.0, 5.0) as u8
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_numbers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub whatsapp: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl ContactInfo {
    pub fn primary_phone(&self) -> Option<&str> {
        self.contact_numbers
            .first()
            .or(self.whatsapp.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.contact_numbers.is_empty()
            && self.whatsapp.is_empty()
            && self.email.is_none()
            && self.website.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

impl SocialMedia {
    /// `(network, url)` pairs for the links that are set.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("facebook", self.facebook.as_deref()),
            ("instagram", self.instagram.as_deref()),
            ("twitter", self.twitter.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.filter(|u| !u.is_empty()).map(|u| (name, u)))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Location {
    pub fn maps_url(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(format!(
                "https://www.google.com/maps/search/?api=1&query={},{}",
                lat, lng
            )),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Frontend view of a business.
///
/// Built from one of several backend shapes (see `dto`); the backend is
/// single-language per request, so `*_ar` fields mirror the localized value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub name_ar: String,
    pub about: Option<String>,
    pub about_ar: Option<String>,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
    pub logo: Option<String>,
    pub cover_image: Option<String>,
    pub rating: Rating,
    pub views_count: u64,
    pub attributes: BTreeMap<String, String>,
    pub is_open: bool,
    pub contact_info: Option<ContactInfo>,
    pub social_media: Option<SocialMedia>,
    pub tags: Vec<Tag>,
    pub address: Option<String>,
    pub location: Option<Location>,
    pub available_tabs: Option<AvailableTabs>,
    pub tabs: Vec<BusinessTab>,
    pub display_title: String,
    pub display_description: String,
}

impl Business {
    fn attribute_flag(&self, key: &str) -> bool {
        self.attributes
            .get(key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn is_verified(&self) -> bool {
        self.attribute_flag("verified")
    }

    pub fn is_featured(&self) -> bool {
        self.attribute_flag("featured")
    }

    pub fn is_premium(&self) -> bool {
        self.attribute_flag("premium")
    }

    pub fn localized_name(&self, locale: Locale) -> &str {
        locale.pick(&self.name, &self.name_ar)
    }

    pub fn localized_about(&self, locale: Locale) -> Option<&str> {
        locale.pick_opt(self.about.as_deref(), self.about_ar.as_deref())
    }

    /// Sidebar title: backend display title first, then the name.
    pub fn title(&self, locale: Locale) -> &str {
        if self.display_title.is_empty() {
            self.localized_name(locale)
        } else {
            &self.display_title
        }
    }

    pub fn description(&self, locale: Locale) -> Option<&str> {
        if self.display_description.is_empty() {
            self.localized_about(locale)
        } else {
            Some(&self.display_description)
        }
    }

    /// Tab availability, all-false when the backend omitted it.
    pub fn tabs_availability(&self) -> AvailableTabs {
        self.available_tabs.unwrap_or_default()
    }

    /// Profile URL; listings without a category fall back to `businesses`.
    pub fn href(&self, locale: Locale) -> String {
        let category = self
            .category_slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("businesses");
        format!("/{}/directories/{}/{}", locale, category, self.slug)
    }

    pub fn primary_phone(&self) -> Option<&str> {
        self.contact_info.as_ref().and_then(|c| c.primary_phone())
    }

    pub fn whatsapp_url(&self) -> Option<String> {
        let contact = self.contact_info.as_ref()?;
        let number = contact.whatsapp.first().or(contact.contact_numbers.first())?;
        let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            None
        } else {
            Some(format!("https://wa.me/{}", digits))
        }
    }

    /// Card images; a single cover for now, placeholder when missing.
    pub fn card_images(&self) -> Vec<String> {
        match self.cover_image.as_deref().filter(|s| !s.is_empty()) {
            Some(cover) => vec![cover.to_string()],
            None => vec![PLACEHOLDER_IMAGE.to_string()],
        }
    }
}

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";
pub const PLACEHOLDER_BANNER: &str = "/images/placeholder-banner.jpg";
