use crate::shared::api::Paged;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// First page size of the reviews tab.
pub const REVIEWS_PAGE_SIZE: u32 = 10;

// ============================================================================
// Wire
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDto {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewsResponseDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<ReviewDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
}

impl ReviewsResponseDto {
    pub fn into_page(self, requested_page: u32, requested_limit: u32) -> Paged<Review> {
        Paged {
            items: self.reviews.into_iter().map(Review::from).collect(),
            total: self.total,
            page: self.page.filter(|p| *p > 0).unwrap_or(requested_page),
            limit: self.limit.filter(|l| *l > 0).unwrap_or(requested_limit),
            has_more: self.has_more,
        }
    }
}

/// `POST /directories/businesses/{slug}/reviews`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub rating: u8,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewResponse {
    pub review: ReviewDto,
}

// ============================================================================
// Entity
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub business_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
    pub helpful_count: Option<u32>,
}

impl From<ReviewDto> for Review {
    fn from(dto: ReviewDto) -> Self {
        Self {
            id: dto.id,
            business_id: dto.business_id,
            user_id: dto.user_id,
            user_name: dto.user_name,
            user_avatar: dto.user_avatar,
            rating: dto.rating.min(MAX_RATING),
            comment: dto.comment.unwrap_or_default(),
            created_at: dto.created_at,
            helpful_count: None,
        }
    }
}

impl Review {
    /// Avatar fallback: first letter of the reviewer name.
    pub fn initial(&self) -> String {
        self.user_name
            .chars()
            .find(|c| !c.is_whitespace())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Date part of `created_at` (`2024-03-15T..` -> `2024-03-15`).
    pub fn created_date(&self) -> &str {
        self.created_at
            .split('T')
            .next()
            .unwrap_or(&self.created_at)
    }
}

// ============================================================================
// Validation
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewValidationError {
    MissingRating,
    EmptyComment,
}

impl fmt::Display for ReviewValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewValidationError::MissingRating => f.write_str("Please select a rating"),
            ReviewValidationError::EmptyComment => f.write_str("Please write a comment"),
        }
    }
}

impl std::error::Error for ReviewValidationError {}

impl CreateReviewRequest {
    /// Builds a request from the modal inputs. Images are not uploaded yet,
    /// so `image_urls` is always left out.
    pub fn validated(rating: u8, comment: &str) -> Result<Self, ReviewValidationError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ReviewValidationError::MissingRating);
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ReviewValidationError::EmptyComment);
        }
        Ok(Self {
            rating,
            comment: comment.to_string(),
            image_urls: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation() {
        assert_eq!(
            CreateReviewRequest::validated(0, "nice"),
            Err(ReviewValidationError::MissingRating)
        );
        assert_eq!(
            CreateReviewRequest::validated(6, "nice"),
            Err(ReviewValidationError::MissingRating)
        );
        assert_eq!(
            CreateReviewRequest::validated(4, "   "),
            Err(ReviewValidationError::EmptyComment)
        );
        let ok = CreateReviewRequest::validated(5, " great food ").unwrap();
        assert_eq!(ok.comment, "great food");
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "rating": 5, "comment": "great food" })
        );
    }

    #[test]
    fn test_reviews_page_mapping() {
        let dto: ReviewsResponseDto = serde_json::from_value(json!({
            "reviews": [{
                "id": 1,
                "business_id": 42,
                "user_id": 3,
                "user_name": "sara",
                "rating": 4,
                "comment": "Lovely",
                "created_at": "2024-03-15T14:02:26Z"
            }],
            "total": 31,
            "page": 1,
            "limit": 10,
            "has_more": true
        }))
        .unwrap();
        let page = dto.into_page(1, REVIEWS_PAGE_SIZE);

        assert_eq!(page.total, 31);
        assert!(page.has_more);
        let review = &page.items[0];
        assert_eq!(review.initial(), "S");
        assert_eq!(review.created_date(), "2024-03-15");
    }

    #[test]
    fn test_null_fields_default() {
        let dto: ReviewsResponseDto = serde_json::from_value(json!({
            "reviews": [{ "id": 2, "rating": 3, "comment": null }]
        }))
        .unwrap();
        let page = dto.into_page(2, 10);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
        assert_eq!(page.items[0].comment, "");
        assert_eq!(page.items[0].initial(), "?");
    }

    #[test]
    fn test_null_reviews_list_is_empty() {
        let dto: ReviewsResponseDto = serde_json::from_value(json!({
            "reviews": null,
            "total": null,
            "has_more": null
        }))
        .unwrap();
        let page = dto.into_page(1, REVIEWS_PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert!(!page.has_more);
    }
}
