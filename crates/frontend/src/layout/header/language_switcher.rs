use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::Msg;
use contracts::shared::locale::{switch_locale_path, Locale};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// The other locale, i.e. the one the switcher links to.
fn other(locale: Locale) -> Locale {
    match locale {
        Locale::Ar => Locale::En,
        Locale::En => Locale::Ar,
    }
}

/// Same page in the other language; the query string is kept.
fn switched_href(path: &str, search: &str, target: Locale) -> String {
    let path = switch_locale_path(path, target);
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        path
    } else {
        format!("{}?{}", path, search)
    }
}

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let location = use_location();

    let target = move || other(ctx.locale.get());
    let href = move || {
        switched_href(
            &location.pathname.get(),
            &location.search.get(),
            target(),
        )
    };

    view! {
        <a class="language-switcher" href=href hreflang=move || target().as_str()>
            {move || Msg::LanguageName.text(target())}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switched_href_keeps_query() {
        assert_eq!(
            switched_href("/ar/directories/cafes", "?tag=wifi&sort=views", Locale::En),
            "/en/directories/cafes?tag=wifi&sort=views"
        );
        assert_eq!(switched_href("/en/search", "", Locale::Ar), "/ar/search");
        assert_eq!(other(Locale::Ar), Locale::En);
    }
}
