pub mod category_menu;
pub mod header;
pub mod language_switcher;

pub use category_menu::CategoryMenu;
pub use header::Header;
pub use language_switcher::LanguageSwitcher;
