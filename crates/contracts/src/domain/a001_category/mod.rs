pub mod aggregate;
pub mod listing;
