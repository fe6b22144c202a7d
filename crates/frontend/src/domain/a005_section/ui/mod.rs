mod featured_section;

pub use featured_section::FeaturedSection;
