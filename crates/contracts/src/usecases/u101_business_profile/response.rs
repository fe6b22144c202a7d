use crate::domain::a002_business::aggregate::Business;
use crate::domain::a002_business::details::{AboutData, BusinessMedia};
use serde::{Deserialize, Serialize};

/// Everything the profile renders on first paint. The lazily loaded tabs
/// (services, reviews) are not part of it; `media` is preloaded only when
/// the business has any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePage {
    pub business: Business,
    pub about: AboutData,
    pub media: Vec<BusinessMedia>,
    /// Whether `media` was fetched; an empty preloaded list is final.
    pub media_loaded: bool,
}

impl ProfilePage {
    pub fn new(business: Business, about: AboutData, media: Option<Vec<BusinessMedia>>) -> Self {
        Self {
            business,
            about: about.normalized(),
            media_loaded: media.is_some(),
            media: media.unwrap_or_default(),
        }
    }

    /// Open status: the hours endpoint knows better than the record.
    pub fn is_open(&self) -> bool {
        self.about.is_open.unwrap_or(self.business.is_open)
    }
}
