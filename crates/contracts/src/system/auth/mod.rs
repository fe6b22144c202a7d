use serde::{Deserialize, Serialize};

/// localStorage key of the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(phone: &str, password: &str) -> Option<Self> {
        let phone = phone.trim();
        if phone.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            phone: phone.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// `data` of the login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<AuthToken>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl LoginResponse {
    pub fn access_token(&self) -> Option<&str> {
        self.token
            .as_ref()
            .map(|t| t.access_token.as_str())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiEnvelope;
    use serde_json::json;

    #[test]
    fn test_token_extraction() {
        let env: ApiEnvelope<LoginResponse> = serde_json::from_value(json!({
            "data": {
                "token": { "access_token": "abc", "refresh_token": "r" },
                "user": { "id": 5, "phone": "55512345" }
            },
            "message": null
        }))
        .unwrap();
        assert_eq!(env.data.unwrap().access_token(), Some("abc"));

        let empty: LoginResponse = serde_json::from_value(json!({ "token": null })).unwrap();
        assert_eq!(empty.access_token(), None);
    }

    #[test]
    fn test_login_request_requires_fields() {
        assert!(LoginRequest::new("  ", "x").is_none());
        assert!(LoginRequest::new("555", "").is_none());
        let req = LoginRequest::new(" 555 ", "secret").unwrap();
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "phone": "555", "password": "secret" }));
    }
}
