use crate::layout::global_context::use_locale;
use crate::layout::header::{CategoryMenu, LanguageSwitcher};
use crate::shared::components::search_bar::SearchBar;
use crate::shared::i18n::Msg;
use leptos::prelude::*;

/// Brand link, search box, language toggle and the category strip.
#[component]
pub fn Header() -> impl IntoView {
    let locale = use_locale();
    let home = move || format!("/{}/directories", locale.get());

    view! {
        <header class="site-header">
            <div class="site-header__bar">
                <a class="site-header__brand" href=home>
                    {move || Msg::Directories.text(locale.get())}
                </a>
                <SearchBar locale=locale />
                <LanguageSwitcher />
            </div>
            <CategoryMenu />
        </header>
    }
}
