//! Dynamic filter definitions a category exposes (`/categories/{slug}/filters`).

use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: i64,
    pub slug: String,
    pub label: String,
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_default: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub id: i64,
    pub slug: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub filter_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_order: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FiltersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters: Vec<Filter>,
}

impl Filter {
    /// Options by display order.
    pub fn sorted_options(&self) -> Vec<&FilterOption> {
        let mut options: Vec<&FilterOption> = self.options.iter().collect();
        options.sort_by_key(|o| o.display_order);
        options
    }

    pub fn default_value(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.is_default)
            .map(|o| o.value.as_str())
    }
}

/// Active filters by display order.
pub fn active_filters(filters: Vec<Filter>) -> Vec<Filter> {
    let mut filters: Vec<Filter> = filters.into_iter().filter(|f| f.is_active).collect();
    filters.sort_by_key(|f| f.display_order);
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_active_filters_sorted() {
        let resp: FiltersResponse = serde_json::from_value(json!({
            "filters": [
                { "id": 1, "slug": "price", "label": "Price", "type": "select", "display_order": 2, "is_active": true,
                  "options": [
                      { "id": 11, "slug": "high", "label": "High", "value": "high", "display_order": 2 },
                      { "id": 10, "slug": "low", "label": "Low", "value": "low", "is_default": true, "display_order": 1 }
                  ] },
                { "id": 2, "slug": "hidden", "label": "Hidden", "display_order": 0, "is_active": false },
                { "id": 3, "slug": "delivery", "label": "Delivery", "display_order": 1, "is_active": true }
            ]
        }))
        .unwrap();

        let filters = active_filters(resp.filters);
        let slugs: Vec<&str> = filters.iter().map(|f| f.slug.as_str()).collect();
        assert_eq!(slugs, vec!["delivery", "price"]);

        let price = &filters[1];
        assert_eq!(price.default_value(), Some("low"));
        assert_eq!(price.sorted_options()[0].slug, "low");
    }
}
