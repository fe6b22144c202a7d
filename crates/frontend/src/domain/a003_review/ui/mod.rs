mod add_review;
mod review_card;
mod summary;

pub use add_review::AddReviewModal;
pub use review_card::ReviewCard;
pub use summary::ReviewSummaryPanel;
