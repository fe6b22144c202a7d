use crate::domain::a001_category::ui::details::CategoryListing;
use crate::domain::a001_category::ui::list::DirectoriesList;
use crate::domain::a002_business::ui::details::BusinessDetail;
use crate::domain::a002_business::ui::search::SearchResults;
use crate::layout::global_context::use_locale;
use crate::shared::components::page_state::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

/// Every page lives under a locale prefix; `/` goes to the Arabic home.
/// Static segments are listed before the `:category` catch.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let locale = use_locale();

    view! {
        <Routes fallback=move || view! { <NotFound locale=locale.get_untracked() /> }>
            <Route path=path!("/") view=|| view! { <Redirect path="/ar/directories" /> } />
            <Route path=path!("/:locale") view=DirectoriesList />
            <Route path=path!("/:locale/directories") view=DirectoriesList />
            <Route path=path!("/:locale/search") view=SearchResults />
            <Route path=path!("/:locale/directories/businesses/:slug") view=BusinessDetail />
            <Route path=path!("/:locale/directories/:category") view=CategoryListing />
            <Route path=path!("/:locale/directories/:category/:slug") view=BusinessDetail />
        </Routes>
    }
}
