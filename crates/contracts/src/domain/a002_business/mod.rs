pub mod aggregate;
pub mod details;
pub mod dto;
pub mod search;
pub mod tabs;
