pub mod a001_category;
pub mod a002_business;
pub mod a003_review;
pub mod a004_tag;
pub mod a005_section;
pub mod a006_for_sale;
pub mod a007_filter;
