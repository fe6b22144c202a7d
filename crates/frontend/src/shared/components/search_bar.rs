use crate::shared::i18n::Msg;
use crate::shared::icons::icon;
use contracts::domain::a002_business::search::search_href;
use contracts::shared::locale::Locale;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// Navbar search box; submitting navigates to `/{locale}/search?q=...`.
#[component]
pub fn SearchBar(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(href) = search_href(locale.get_untracked(), &query.get_untracked()) {
            navigate(&href, Default::default());
        }
    };

    view! {
        <form class="search-bar" role="search" on:submit=on_submit>
            <Input
                value=query
                placeholder=Signal::derive(move || Msg::SearchPlaceholder.text(locale.get()).to_string())
            >
                <InputSuffix slot>
                    <button type="submit" class="search-bar__submit">{icon("search")}</button>
                </InputSuffix>
            </Input>
        </form>
    }
}
