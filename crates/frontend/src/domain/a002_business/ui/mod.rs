pub mod details;
pub mod search;
