use crate::shared::locale::Locale;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_ar: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub businesses_count: Option<u64>,
}

impl Category {
    pub fn display_name(&self, locale: Locale) -> &str {
        locale
            .pick_opt(Some(self.name.as_str()), Some(self.name_ar.as_str()))
            .unwrap_or(self.slug.as_str())
    }

    pub fn display_description(&self, locale: Locale) -> Option<&str> {
        locale.pick_opt(self.description.as_deref(), self.description_ar.as_deref())
    }

    pub fn href(&self, locale: Locale) -> String {
        format!("/{}/directories/{}", locale, self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWithSubcategories {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subcategories: Vec<Category>,
}

// ============================================================================
// Wire responses
// ============================================================================

/// `GET /categories`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

/// `GET /categories/{slug}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_falls_back_to_english() {
        let category: Category = serde_json::from_value(json!({
            "id": 3,
            "slug": "restaurants",
            "name": "Restaurants",
            "icon": "🍽"
        }))
        .unwrap();

        assert_eq!(category.display_name(Locale::En), "Restaurants");
        assert_eq!(category.display_name(Locale::Ar), "Restaurants");
        assert_eq!(category.href(Locale::En), "/en/directories/restaurants");
        assert!(category.display_description(Locale::Ar).is_none());
    }

    #[test]
    fn test_subcategories_flatten() {
        let parsed: CategoryWithSubcategories = serde_json::from_value(json!({
            "id": 1,
            "slug": "food",
            "name": "Food",
            "name_ar": "طعام",
            "subcategories": [{ "id": 2, "slug": "cafes", "name": "Cafes", "parent_id": 1 }]
        }))
        .unwrap();

        assert_eq!(parsed.category.display_name(Locale::Ar), "طعام");
        assert_eq!(parsed.subcategories[0].parent_id, Some(1));
    }
}
