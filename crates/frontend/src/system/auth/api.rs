use contracts::shared::locale::Locale;
use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::http::{post_data, ApiError};

/// Login with phone number and password, returning the bearer token
pub async fn login(request: &LoginRequest, locale: Locale) -> Result<String, ApiError> {
    let response: Option<LoginResponse> = post_data("/auth/login", request, locale).await?;

    response
        .as_ref()
        .and_then(LoginResponse::access_token)
        .map(str::to_string)
        .ok_or_else(|| ApiError::Parse("login response has no access token".to_string()))
}
