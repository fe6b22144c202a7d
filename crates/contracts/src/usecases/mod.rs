pub mod u101_business_profile;
pub mod u102_category_listing;
pub mod u103_directories_home;
