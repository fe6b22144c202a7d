use crate::shared::http::get_data;
use contracts::domain::a001_category::aggregate::{CategoriesResponse, Category};
use contracts::shared::locale::Locale;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use web_sys::window;

/// App-wide state derived from the URL. Must be created inside `<Router>`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Locale from the first path segment; unknown or missing means `ar`.
    pub locale: Memo<Locale>,
    /// Top-level categories for the navbar.
    pub categories: RwSignal<Vec<Category>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let location = use_location();
        Self {
            locale: Memo::new(move |_| location.pathname.with(|path| locale_from_path(path))),
            categories: RwSignal::new(Vec::new()),
        }
    }

    /// Keeps `<html dir lang>` in sync with the locale.
    pub fn init_document_integration(&self) {
        let locale = self.locale;
        Effect::new(move |_| {
            let locale = locale.get();
            let Some(root) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let _ = root.set_attribute("dir", locale.dir());
            let _ = root.set_attribute("lang", locale.as_str());
        });
    }

    /// Loads navbar categories, again whenever the locale changes.
    pub fn init_categories(&self) {
        let this = *self;
        Effect::new(move |_| {
            let locale = this.locale.get();
            spawn_local(async move {
                match get_data::<CategoriesResponse>("/categories", locale).await {
                    Ok(resp) => this.categories.set(resp.categories),
                    Err(e) => log::error!("Failed to load categories: {}", e),
                }
            });
        });
    }
}

pub fn locale_from_path(path: &str) -> Locale {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
    Locale::from_segment(first)
}

/// Locale of the current route
pub fn use_locale() -> Memo<Locale> {
    use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found")
        .locale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_path() {
        assert_eq!(locale_from_path("/en/directories"), Locale::En);
        assert_eq!(locale_from_path("/ar"), Locale::Ar);
        assert_eq!(locale_from_path("/fr/directories"), Locale::Ar);
        assert_eq!(locale_from_path("/"), Locale::Ar);
    }
}
