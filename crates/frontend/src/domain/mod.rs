pub mod a001_category;
pub mod a002_business;
pub mod a003_review;
pub mod a005_section;
