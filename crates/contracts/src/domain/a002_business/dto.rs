//! Backend wire shapes of a business and their mapping to [`Business`].
//!
//! The profile endpoint, the category listing and the sections feed each
//! return a slightly different record; all three end up as the same view
//! model.

use super::aggregate::{Business, ContactInfo, Location, Rating, SocialMedia};
use super::tabs::{AvailableTabs, BusinessTab};
use crate::domain::a004_tag::aggregate::Tag;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Profile shape (`/categories/{category}/{slug}`, `/directories/businesses/{slug}`)
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDto {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category_slug: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub ad_image: Option<String>,
    /// Free-form map: `phone`, `whatsapp`, `email`, `website`, `address`.
    /// Values may be strings or arrays of strings.
    #[serde(default)]
    pub contact_info: Option<Value>,
    #[serde(default)]
    pub social_media: Option<SocialMedia>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: Rating,
    #[serde(default)]
    pub status: Option<String>,
    /// Full tag objects on some deployments, bare tag names on others.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<TagRef>,
    #[serde(default)]
    pub available_tabs: Option<AvailableTabs>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tabs: Vec<BusinessTab>,
    #[serde(default)]
    pub display_title: Option<String>,
    #[serde(default)]
    pub display_description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagRef {
    Full(Tag),
    Name(String),
}

impl From<TagRef> for Tag {
    fn from(tag: TagRef) -> Self {
        match tag {
            TagRef::Full(tag) => tag,
            TagRef::Name(name) => Tag {
                id: 0,
                slug: name.clone(),
                name_ar: name.clone(),
                name,
                tag_type: String::new(),
                icon: None,
                description: None,
                description_ar: None,
                is_active: true,
                created_at: String::new(),
                updated_at: String::new(),
            },
        }
    }
}

/// Collects string or string-array values of `key`.
fn contact_values(map: &serde_json::Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn contact_string(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    contact_values(map, key).into_iter().next()
}

/// Splits the free-form contact map into typed contact info plus address.
fn parse_contact(value: Option<&Value>) -> (Option<ContactInfo>, Option<String>) {
    let Some(Value::Object(map)) = value else {
        return (None, None);
    };

    let mut phones = contact_values(map, "contact_numbers");
    if phones.is_empty() {
        phones = contact_values(map, "phone");
    }
    let whatsapp = contact_values(map, "whatsapp");
    // Businesses with only a WhatsApp line are still callable.
    if phones.is_empty() {
        phones = whatsapp.clone();
    }

    let info = ContactInfo {
        contact_numbers: phones,
        whatsapp,
        email: contact_string(map, "email"),
        website: contact_string(map, "website"),
    };
    let address = contact_string(map, "address");
    ((!info.is_empty()).then_some(info), address)
}

impl From<BusinessDto> for Business {
    fn from(dto: BusinessDto) -> Self {
        let (contact_info, address) = parse_contact(dto.contact_info.as_ref());
        let display_title = dto
            .display_title
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| dto.name.clone());
        let display_description = dto
            .display_description
            .filter(|s| !s.is_empty())
            .or_else(|| dto.about.clone())
            .unwrap_or_default();

        Business {
            id: dto.id,
            slug: dto.slug,
            name_ar: dto.name.clone(),
            name: dto.name,
            about_ar: dto.about.clone(),
            about: dto.about,
            category_id: dto.category_id.unwrap_or(0),
            category_name: dto.category_name,
            category_slug: dto.category_slug,
            logo: dto.logo,
            cover_image: dto.cover_image,
            rating: dto.rating,
            views_count: dto.view_count,
            attributes: dto.attributes.unwrap_or_default(),
            // Would need the working hours; the profile shows status_text instead.
            is_open: true,
            contact_info,
            social_media: dto.social_media,
            tags: dto
                .tags
                .into_iter()
                .map(Tag::from)
                .filter(|t| !t.slug.is_empty())
                .collect(),
            address,
            location: dto.location,
            available_tabs: dto.available_tabs,
            tabs: dto.tabs,
            display_title,
            display_description,
        }
    }
}

// ============================================================================
// Listing shape (`/categories/{slug}/businesses`, `/search/businesses`)
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingBusinessDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_id: i64,
    #[serde(default)]
    pub category_slug: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_count: u64,
    /// Flat rating fields; some deployments send the nested `rating` object
    /// instead.
    #[serde(default)]
    pub rating_avg: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u64>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<ListingBusinessDto> for Business {
    fn from(dto: ListingBusinessDto) -> Self {
        let rating = match (dto.rating_avg, dto.rating_count, dto.rating) {
            (Some(average), count, _) => Rating {
                average,
                count: count.unwrap_or(0),
            },
            (None, _, Some(rating)) => rating,
            (None, count, None) => Rating {
                average: 0.0,
                count: count.unwrap_or(0),
            },
        };
        let phones: Vec<String> = dto.phone.iter().filter(|p| !p.is_empty()).cloned().collect();
        let contact = ContactInfo {
            contact_numbers: phones.clone(),
            whatsapp: phones,
            email: dto.email,
            website: dto.website,
        };
        let location = match (dto.latitude, dto.longitude) {
            (None, None) => None,
            (latitude, longitude) => Some(Location {
                latitude,
                longitude,
            }),
        };

        Business {
            id: dto.id,
            slug: dto.slug,
            name_ar: dto.name.clone(),
            display_title: dto.name.clone(),
            name: dto.name,
            about_ar: dto.about.clone(),
            display_description: dto.about.clone().unwrap_or_default(),
            about: dto.about,
            category_id: dto.category_id,
            category_name: None,
            category_slug: dto.category_slug,
            logo: dto.logo,
            cover_image: dto.cover_image,
            rating,
            views_count: dto.view_count,
            attributes: dto.attributes.unwrap_or_default(),
            is_open: true,
            contact_info: (!contact.is_empty()).then_some(contact),
            social_media: None,
            tags: Vec::new(),
            address: dto.address,
            location,
            available_tabs: None,
            tabs: Vec::new(),
        }
    }
}

// ============================================================================
// Wire responses
// ============================================================================

/// Paged business list as returned by listing and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct BusinessListResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub businesses: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
}

impl<T> Default for BusinessListResponse<T> {
    fn default() -> Self {
        Self {
            businesses: Vec::new(),
            total: 0,
            page: None,
            limit: None,
            has_more: false,
        }
    }
}

impl<T: Into<Business>> BusinessListResponse<T> {
    /// Maps the records and fills in the requested paging when the backend
    /// left it out.
    pub fn into_page(self, requested_page: u32, requested_limit: u32) -> crate::shared::api::Paged<Business> {
        crate::shared::api::Paged {
            items: self.businesses.into_iter().map(Into::into).collect(),
            total: self.total,
            page: self.page.unwrap_or(requested_page),
            limit: self.limit.unwrap_or(requested_limit),
            has_more: self.has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::locale::Locale;
    use serde_json::json;

    #[test]
    fn test_profile_mapping() {
        let dto: BusinessDto = serde_json::from_value(json!({
            "id": 42,
            "user_id": 7,
            "name": "Shawarma House",
            "slug": "shawarma-house",
            "category_slug": "restaurants",
            "about": "Best in town",
            "contact_info": {
                "phone": "+965 5555 1234",
                "email": "hi@example.com",
                "address": "Salmiya, Block 10"
            },
            "attributes": { "verified": "true", "featured": "false" },
            "view_count": 1200,
            "rating": { "average": 4.46, "count": 80 },
            "status": "active",
            "available_tabs": { "has_faqs": true, "has_media": true },
            "tabs": [{ "slug": "about", "label": "About", "order": 1, "enabled": true }]
        }))
        .unwrap();

        let business = Business::from(dto);
        assert_eq!(business.category_id, 0);
        assert_eq!(business.name_ar, "Shawarma House");
        assert_eq!(business.about_ar.as_deref(), Some("Best in town"));
        assert_eq!(business.views_count, 1200);
        assert!(business.is_verified());
        assert!(!business.is_featured());
        assert!(business.is_open);
        assert_eq!(business.primary_phone(), Some("+965 5555 1234"));
        assert_eq!(business.address.as_deref(), Some("Salmiya, Block 10"));
        assert_eq!(business.display_title, "Shawarma House");
        assert_eq!(business.description(Locale::En), Some("Best in town"));
        assert_eq!(business.rating.display_average(), "4.5");
        assert_eq!(business.href(Locale::Ar), "/ar/directories/restaurants/shawarma-house");
        assert!(business.tabs_availability().has_media);
        assert!(!business.tabs_availability().has_branches);
    }

    #[test]
    fn test_profile_contact_arrays_and_whatsapp_fallback() {
        let dto: BusinessDto = serde_json::from_value(json!({
            "id": 1,
            "name": "Cafe",
            "slug": "cafe",
            "contact_info": { "whatsapp": ["+965 9999 0000", ""] }
        }))
        .unwrap();
        let business = Business::from(dto);

        let contact = business.contact_info.clone().unwrap();
        assert_eq!(contact.whatsapp, vec!["+965 9999 0000"]);
        assert_eq!(business.primary_phone(), Some("+965 9999 0000"));
        assert_eq!(business.whatsapp_url().as_deref(), Some("https://wa.me/96599990000"));
        assert_eq!(business.tabs_availability(), AvailableTabs::default());
        assert_eq!(business.href(Locale::En), "/en/directories/businesses/cafe");
    }

    #[test]
    fn test_listing_mapping_flat_rating() {
        let dto: ListingBusinessDto = serde_json::from_value(json!({
            "id": 9,
            "name": "Bakery",
            "slug": "bakery",
            "category_id": 3,
            "category_slug": "food",
            "phone": "123",
            "latitude": 29.3,
            "longitude": 47.9,
            "view_count": 5,
            "rating_avg": 3.9,
            "rating_count": 12
        }))
        .unwrap();
        let business = Business::from(dto);

        assert_eq!(business.category_id, 3);
        assert_eq!(business.rating, Rating { average: 3.9, count: 12 });
        assert_eq!(business.rating.filled_stars(), 4);
        assert_eq!(business.primary_phone(), Some("123"));
        assert!(business.location.unwrap().maps_url().is_some());
        assert_eq!(business.display_description, "");
    }

    #[test]
    fn test_listing_mapping_nested_rating() {
        let dto: ListingBusinessDto = serde_json::from_value(json!({
            "id": 9,
            "name": "Bakery",
            "slug": "bakery",
            "rating": { "average": 4.0, "count": 2 }
        }))
        .unwrap();
        let business = Business::from(dto);
        assert_eq!(business.rating.count, 2);
        assert!(business.contact_info.is_none());
        assert!(business.location.is_none());
    }

    #[test]
    fn test_profile_null_collections_are_empty() {
        let dto: BusinessDto = serde_json::from_value(json!({
            "id": 3,
            "name": "Kiosk",
            "slug": "kiosk",
            "tags": null,
            "tabs": null,
            "view_count": null,
            "rating": null,
            "contact_info": null
        }))
        .unwrap();
        let business = Business::from(dto);
        assert!(business.tags.is_empty());
        assert!(business.tabs.is_empty());
        assert_eq!(business.views_count, 0);
        assert_eq!(business.rating.count, 0);
    }

    #[test]
    fn test_profile_tags_as_names_or_objects() {
        let dto: BusinessDto = serde_json::from_value(json!({
            "id": 3,
            "name": "Kiosk",
            "slug": "kiosk",
            "tags": ["halal", { "id": 9, "name": "Delivery", "slug": "delivery" }, ""]
        }))
        .unwrap();
        let business = Business::from(dto);
        let slugs: Vec<&str> = business.tags.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["halal", "delivery"]);
        assert_eq!(business.tags[0].display_name(Locale::Ar), "halal");
        assert_eq!(business.tags[1].id, 9);
    }

    #[test]
    fn test_list_response_null_businesses() {
        let resp: BusinessListResponse<ListingBusinessDto> =
            serde_json::from_value(json!({ "businesses": null, "total": null, "has_more": null }))
                .unwrap();
        let page = resp.into_page(1, 20);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_list_response_paging_defaults() {
        let resp: BusinessListResponse<ListingBusinessDto> =
            serde_json::from_value(json!({ "businesses": [], "total": 0 })).unwrap();
        let page = resp.into_page(2, 20);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 20);
        assert!(!page.has_more);
    }
}
