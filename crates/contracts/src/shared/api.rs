//! Wire envelope used by every directory API response.

use serde::{Deserialize, Serialize};

/// `{ "data": T, "message": string | null }`
///
/// `data` is frequently `null` (or missing) on empty results, so it is kept
/// optional and callers decide on the empty default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
        }
    }

    /// Returns the payload or `T::default()` when the backend sent `null`.
    pub fn into_data_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

/// Error body returned by the directory API on 4xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// The human readable part, `message` first.
    pub fn text(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }
}

/// Generic page of results with the directory API's paging fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            limit: 20,
            has_more: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_data_defaults() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_value(json!({ "data": null, "message": null })).unwrap();
        assert!(env.into_data_or_default().is_empty());

        let env: ApiEnvelope<Vec<u32>> = serde_json::from_value(json!({})).unwrap();
        assert!(env.data.is_none());
    }

    #[derive(Debug, Deserialize)]
    struct NoDefault {
        id: u32,
    }

    #[test]
    fn test_payload_without_default() {
        let env: ApiEnvelope<NoDefault> =
            serde_json::from_value(json!({ "data": { "id": 7 } })).unwrap();
        assert_eq!(env.data.map(|d| d.id), Some(7));

        let env: ApiEnvelope<NoDefault> = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(env.data.is_none());

        let env: ApiEnvelope<NoDefault> = serde_json::from_value(json!({})).unwrap();
        assert!(env.data.is_none());
    }

    #[test]
    fn test_error_body_text() {
        let body: ApiErrorBody =
            serde_json::from_value(json!({ "error": "already reviewed" })).unwrap();
        assert_eq!(body.text(), Some("already reviewed"));

        let body: ApiErrorBody = serde_json::from_value(json!({ "message": " " })).unwrap();
        assert_eq!(body.text(), None);
    }
}
