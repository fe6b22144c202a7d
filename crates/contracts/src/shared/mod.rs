pub mod api;
pub mod locale;
pub mod query;
pub mod serde_utils;
