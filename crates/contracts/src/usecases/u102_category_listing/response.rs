use crate::domain::a001_category::aggregate::Category;
use crate::domain::a001_category::listing::ListingFilters;
use crate::domain::a002_business::aggregate::Business;
use crate::domain::a004_tag::aggregate::Tag;
use crate::domain::a007_filter::aggregate::Filter;
use crate::shared::api::Paged;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPage {
    pub category: Category,
    pub businesses: Paged<Business>,
    pub tags: Vec<Tag>,
    pub filters: Vec<Filter>,
    /// Filter state the page was loaded with.
    pub selected: ListingFilters,
}

impl CategoryPage {
    /// Appends the next page ("load more").
    pub fn extend(&mut self, next: Paged<Business>) {
        self.businesses.items.extend(next.items);
        self.businesses.page = next.page;
        self.businesses.has_more = next.has_more;
        self.businesses.total = next.total;
        self.selected.page = next.page;
    }
}
