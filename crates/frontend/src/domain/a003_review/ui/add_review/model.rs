//! API layer for posting a review

use crate::shared::http::{post_accepted, ApiError};
use crate::shared::i18n::Msg;
use contracts::domain::a003_review::aggregate::{CreateReviewRequest, CreateReviewResponse, Review};
use contracts::shared::locale::Locale;

/// Any 2xx means the review is stored; the echoed review is optional.
pub async fn submit_review(
    slug: &str,
    request: &CreateReviewRequest,
    locale: Locale,
) -> Result<Option<Review>, ApiError> {
    let path = format!("/directories/businesses/{}/reviews", urlencoding::encode(slug));
    let resp: Option<CreateReviewResponse> = post_accepted(&path, request, locale).await?;
    Ok(resp.map(|r| r.review.into()))
}

/// The stored token was rejected; the user has to log in again.
pub fn needs_login(err: &ApiError) -> bool {
    err.status() == Some(401)
}

/// Text shown in the modal for a failed submit. Validation (400) and
/// duplicate (409) answers carry a server message worth showing as is.
pub fn submit_error_text(err: &ApiError, locale: Locale) -> String {
    match (err.status(), err.server_message()) {
        (Some(400 | 409), Some(message)) => message.to_string(),
        _ => Msg::FailedSubmitReview.text(locale).to_string(),
    }
}
