//! Loading and error placeholders shared by all pages.

use crate::shared::i18n::Msg;
use contracts::shared::locale::Locale;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Loading(locale: Locale) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center justify=FlexJustify::Center class="page-state">
            <Spinner />
            <span>{Msg::Loading.text(locale)}</span>
        </Flex>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="page-state page-state--error" role="alert">
            {message}
        </div>
    }
}

/// Full-page "not found" with a link back to the directories.
#[component]
pub fn NotFound(locale: Locale, #[prop(default = Msg::PageNotFound)] msg: Msg) -> impl IntoView {
    view! {
        <div class="page-state page-state--not-found">
            <h1>"404"</h1>
            <p>{msg.text(locale)}</p>
            <a href=format!("/{}/directories", locale)>{Msg::BackHome.text(locale)}</a>
        </div>
    }
}
