//! HTTP helpers for the directory API and the backend page endpoints.

use crate::shared::api_utils::{api_url, directory_url};
use crate::system::auth::storage;
use contracts::shared::api::{ApiEnvelope, ApiErrorBody};
use contracts::shared::locale::{Locale, ACCEPT_LANGUAGE_HEADER, LANGUAGE_HEADER};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

const DEVICE_ID: &str = "00000001-e89b-12d3-a456-426614174000";
const DEVICE_TYPE: &str = "web";
const VERSION_NUMBER: &str = "30.5.4";
const APPLICATION_SOURCE: &str = "q84sale";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never got a response.
    Network(String),
    /// Non-2xx answer; `message` is the server's `message`/`error` text.
    Status { status: u16, message: Option<String> },
    /// Body did not match the expected shape.
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Failed to send request: {}", e),
            ApiError::Status {
                status,
                message: Some(message),
            } => write!(f, "Server error {}: {}", status, message),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "Server error: {}", status),
            ApiError::Parse(e) => write!(f, "Failed to parse response: {}", e),
        }
    }
}

/// Headers every directory API call carries.
fn directory_request(builder: RequestBuilder, locale: Locale) -> RequestBuilder {
    let builder = builder
        .header("Content-Type", "application/json")
        .header("Device-Id", DEVICE_ID)
        .header("Device-Type", DEVICE_TYPE)
        .header("Version-Number", VERSION_NUMBER)
        .header("Application-Source", APPLICATION_SOURCE)
        .header(LANGUAGE_HEADER, locale.as_str())
        .header(ACCEPT_LANGUAGE_HEADER, locale.as_str());

    match storage::get_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.text().map(str::to_string));
    ApiError::Status { status, message }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// `GET` a directory API path and unwrap its `{data, message}` envelope.
/// A `null` data maps to the default value.
pub async fn get_data<T>(path: &str, locale: Locale) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let response = directory_request(Request::get(&directory_url(path)), locale)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let envelope: ApiEnvelope<T> = read_json(response).await?;
    Ok(envelope.into_data_or_default())
}

/// `POST` a JSON body to a directory API path and unwrap the envelope.
pub async fn post_data<B, T>(path: &str, body: &B, locale: Locale) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned + Default,
{
    let response = directory_request(Request::post(&directory_url(path)), locale)
        .json(body)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let envelope: ApiEnvelope<T> = read_json(response).await?;
    Ok(envelope.into_data_or_default())
}

/// `POST` where any 2xx is a success. The envelope's `data` is decoded on a
/// best-effort basis: an empty body or an unexpected shape gives `Ok(None)`.
pub async fn post_accepted<B, T>(path: &str, body: &B, locale: Locale) -> Result<Option<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = directory_request(Request::post(&directory_url(path)), locale)
        .json(body)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response).await);
    }
    let text = response.text().await.unwrap_or_default();
    Ok(accepted_data(path, &text))
}

fn accepted_data<T: DeserializeOwned>(path: &str, body: &str) -> Option<T> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(envelope) => envelope.data,
        Err(e) => {
            log::warn!("Accepted {} with an unexpected payload: {}", path, e);
            None
        }
    }
}

/// `GET` a page payload from our backend (`/api/pages/...`).
pub async fn get_page<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            status: 409,
            message: Some("already reviewed".into()),
        };
        assert_eq!(err.to_string(), "Server error 409: already reviewed");
        assert_eq!(err.server_message(), Some("already reviewed"));

        let err = ApiError::Status {
            status: 404,
            message: None,
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Server error: 404");
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn test_accepted_data_is_best_effort() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Created {
            id: i64,
        }

        assert_eq!(
            accepted_data::<Created>("/x", r#"{"data":{"id":7},"message":"ok"}"#),
            Some(Created { id: 7 })
        );
        assert_eq!(accepted_data::<Created>("/x", r#"{"data":{"review_id":7}}"#), None);
        assert_eq!(accepted_data::<Created>("/x", r#"{"message":"created"}"#), None);
        assert_eq!(accepted_data::<Created>("/x", ""), None);
        assert_eq!(accepted_data::<Created>("/x", "Created"), None);
    }

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
