mod model;
mod page;
mod sidebar;
mod tabs;
mod view_model;

pub use page::BusinessDetail;
