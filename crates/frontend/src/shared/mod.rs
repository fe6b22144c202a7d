pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod http;
pub mod i18n;
pub mod icons;
