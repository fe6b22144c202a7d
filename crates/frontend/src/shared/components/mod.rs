pub mod business_card;
pub mod filter_dropdown;
pub mod page_header;
pub mod page_state;
pub mod rating_stars;
pub mod search_bar;
