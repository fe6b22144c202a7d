use crate::shared::locale::Locale;
use crate::shared::query::QueryString;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LISTINGS_PAGE_SIZE: u32 = 30;

/// Priced service a business offers (services tab).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForSaleService {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_start_from: bool,
}

impl ForSaleService {
    /// `None` when the service has no positive price.
    pub fn price_display(&self, locale: Locale) -> Option<String> {
        self.price
            .filter(|p| *p > 0.0)
            .map(|p| format_price(p, locale))
    }

    /// "Starting from" prefix; only shown together with a price.
    pub fn price_prefix(&self, locale: Locale) -> Option<&'static str> {
        if self.price_start_from && self.price_display(locale).is_some() {
            Some(locale.pick("Starting from", "يبدأ من"))
        } else {
            None
        }
    }
}

/// Prices are in Kuwaiti dinar with one decimal.
pub fn format_price(price: f64, locale: Locale) -> String {
    format!("{:.1} {}", price, locale.pick("KWD", "د.ك"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForSaleServicesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<ForSaleService>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForSaleListing {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForSaleListingsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub listings: Vec<ForSaleListing>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_size: u32,
}

impl ForSaleListingsResponse {
    /// Fills zero page fields from the request.
    pub fn with_request(mut self, query: &ListingsQuery) -> Self {
        if self.page == 0 {
            self.page = query.page;
        }
        if self.page_size == 0 {
            self.page_size = query.page_size;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingsQuery {
    pub page: u32,
    pub page_size: u32,
}

impl Default for ListingsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_LISTINGS_PAGE_SIZE,
        }
    }
}

impl ListingsQuery {
    pub fn to_query(&self) -> QueryString {
        let mut q = QueryString::new();
        q.append("page", self.page.max(1).to_string());
        q.append("page_size", self.page_size.max(1).to_string());
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service(price: Option<f64>, start_from: bool) -> ForSaleService {
        ForSaleService {
            id: "s1".into(),
            icon: String::new(),
            name: "Haircut".into(),
            price,
            price_start_from: start_from,
        }
    }

    #[test]
    fn test_price_cases() {
        assert_eq!(service(None, true).price_display(Locale::En), None);
        assert_eq!(service(Some(0.0), true).price_prefix(Locale::En), None);

        let fixed = service(Some(5.0), false);
        assert_eq!(fixed.price_display(Locale::En).as_deref(), Some("5.0 KWD"));
        assert_eq!(fixed.price_prefix(Locale::En), None);

        let from = service(Some(12.5), true);
        assert_eq!(from.price_display(Locale::Ar).as_deref(), Some("12.5 د.ك"));
        assert_eq!(from.price_prefix(Locale::Ar), Some("يبدأ من"));
    }

    #[test]
    fn test_listings_defaults() {
        let q = ListingsQuery::default();
        assert_eq!(q.to_query().to_string(), "page=1&page_size=30");

        let resp: ForSaleListingsResponse =
            serde_json::from_value(json!({ "listings": [], "total": 0 })).unwrap();
        let resp = resp.with_request(&q);
        assert_eq!(resp.page, 1);
        assert_eq!(resp.page_size, 30);
        assert!(resp.listings.is_empty());
    }
}
