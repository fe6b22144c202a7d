mod model;
mod page;

pub use page::SearchResults;
