//! Rating summary of a business and its star breakdown.

use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSummaryDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_reviews: u64,
    /// Star count ("1".."5") to number of reviews.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_breakdown: BTreeMap<String, u64>,
}

/// `GET /directories/businesses/{slug}/reviews/summary`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSummaryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: ReviewSummaryDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub average_rating: f64,
    pub total_reviews: u64,
    pub rating_breakdown: BTreeMap<String, u64>,
}

impl From<ReviewSummaryResponse> for ReviewSummary {
    fn from(resp: ReviewSummaryResponse) -> Self {
        Self {
            average_rating: resp.summary.average_rating,
            total_reviews: resp.summary.total_reviews,
            rating_breakdown: resp.summary.rating_breakdown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub stars: u8,
    pub count: u64,
    /// 0..=100, rounded.
    pub percentage: u8,
}

impl ReviewSummary {
    /// Rows for 5 down to 1 stars. A zero total is treated as one so that an
    /// empty summary renders empty bars instead of dividing by zero.
    pub fn breakdown(&self) -> Vec<BreakdownRow> {
        let total = self.total_reviews.max(1) as f64;
        (1..=5u8)
            .rev()
            .map(|stars| {
                let count = self
                    .rating_breakdown
                    .get(&stars.to_string())
                    .copied()
                    .unwrap_or(0);
                let percentage = ((count as f64 / total) * 100.0).round().clamp(0.0, 100.0) as u8;
                BreakdownRow {
                    stars,
                    count,
                    percentage,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_breakdown_percentages() {
        let resp: ReviewSummaryResponse = serde_json::from_value(json!({
            "summary": {
                "average_rating": 4.2,
                "total_reviews": 3,
                "rating_breakdown": { "5": 2, "3": 1 }
            }
        }))
        .unwrap();
        let rows = ReviewSummary::from(resp).breakdown();

        assert_eq!(rows.iter().map(|r| r.stars).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!(rows[0], BreakdownRow { stars: 5, count: 2, percentage: 67 });
        assert_eq!(rows[1].percentage, 0);
        assert_eq!(rows[2], BreakdownRow { stars: 3, count: 1, percentage: 33 });
    }

    #[test]
    fn test_empty_summary_has_zero_rows() {
        let rows = ReviewSummary::default().breakdown();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.count == 0 && r.percentage == 0));
    }

    #[test]
    fn test_inconsistent_counts_are_clamped() {
        let summary = ReviewSummary {
            average_rating: 5.0,
            total_reviews: 1,
            rating_breakdown: BTreeMap::from([("5".to_string(), 4)]),
        };
        assert_eq!(summary.breakdown()[0].percentage, 100);
    }

    #[test]
    fn test_null_breakdown_is_empty() {
        let resp: ReviewSummaryResponse = serde_json::from_value(json!({
            "summary": { "average_rating": null, "total_reviews": 0, "rating_breakdown": null }
        }))
        .unwrap();
        let summary = ReviewSummary::from(resp);
        assert!(summary.rating_breakdown.is_empty());
        assert!(summary.breakdown().iter().all(|r| r.count == 0));

        let resp: ReviewSummaryResponse =
            serde_json::from_value(json!({ "summary": null })).unwrap();
        assert_eq!(ReviewSummary::from(resp).total_reviews, 0);
    }
}
