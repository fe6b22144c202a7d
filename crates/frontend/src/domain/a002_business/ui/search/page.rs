//! Search results page, driven by the navbar search bar

use super::model::{search_businesses, sort_href, sort_options};
use crate::layout::global_context::use_locale;
use crate::shared::components::business_card::BusinessCard;
use crate::shared::components::filter_dropdown::FilterDropdown;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_state::{ErrorMessage, Loading};
use crate::shared::i18n::Msg;
use contracts::domain::a002_business::aggregate::Business;
use contracts::domain::a002_business::search::SearchFilters;
use contracts::shared::api::Paged;
use contracts::shared::query::QueryString;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use thaw::*;

#[component]
pub fn SearchResults() -> impl IntoView {
    let locale = use_locale();
    let location = use_location();
    let query = Memo::new(move |_| QueryString::parse(&location.search.get()));
    let filters = Memo::new(move |_| SearchFilters::from_page_query(&query.get()));

    let results = RwSignal::new(Option::<Paged<Business>>::None);
    let loading = RwSignal::new(false);
    let loading_more = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let request = StoredValue::new(0u32);

    Effect::new(move |_| {
        let filters = filters.get();
        let locale = locale.get();
        let id = request.get_value().wrapping_add(1);
        request.set_value(id);

        if filters.query.trim().is_empty() {
            results.set(None);
            loading.set(false);
            return;
        }

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = search_businesses(&filters, locale).await;
            if request.get_value() != id {
                return;
            }
            match result {
                Ok(page) => results.set(Some(page)),
                Err(e) => {
                    log::error!("Search failed: {}", e);
                    results.set(None);
                    error.set(Some(Msg::LoadFailed.text(locale).to_string()));
                }
            }
            loading.set(false);
        });
    });

    let load_more = move || {
        if loading_more.get_untracked() {
            return;
        }
        let Some(next) = results.with_untracked(|r| r.as_ref().filter(|r| r.has_more).map(|r| r.page + 1))
        else {
            return;
        };
        let filters = SearchFilters {
            page: Some(next),
            ..filters.get_untracked()
        };
        let locale = locale.get_untracked();
        let id = request.get_value();
        loading_more.set(true);

        spawn_local(async move {
            match search_businesses(&filters, locale).await {
                Ok(more) if request.get_value() == id => results.update(|r| {
                    if let Some(r) = r {
                        r.items.extend(more.items);
                        r.page = more.page;
                        r.has_more = more.has_more;
                    }
                }),
                Ok(_) => {}
                Err(e) => log::error!("Failed to load more results: {}", e),
            }
            loading_more.set(false);
        });
    };

    let navigate = use_navigate();
    let on_sort = Callback::new(move |sort: String| {
        let href = sort_href(&location.pathname.get_untracked(), &query.get_untracked(), &sort);
        navigate(&href, Default::default());
    });
    let selected_sort = Signal::derive(move || {
        filters.with(|f| f.sort.unwrap_or_default().as_str().to_string())
    });

    view! {
        <div class="page page--search">
            {move || {
                let locale = locale.get();
                let text = filters.with(|f| f.query.trim().to_string());
                view! {
                    <PageHeader title=format!("{} \"{}\"", Msg::SearchResultsFor.text(locale), text)>
                        <FilterDropdown
                            label=Msg::SortBy.text(locale)
                            options=sort_options(locale)
                            selected=selected_sort
                            on_change=on_sort
                        />
                    </PageHeader>
                }
            }}
            {move || {
                let locale = locale.get();
                if loading.get() {
                    return view! { <Loading locale=locale /> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <ErrorMessage message=err /> }.into_any();
                }
                let items = results.with(|r| r.as_ref().map(|r| r.items.clone()).unwrap_or_default());
                if items.is_empty() {
                    return view! { <p class="empty-state">{Msg::NoSearchResults.text(locale)}</p> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {items
                            .into_iter()
                            .map(|business| view! { <BusinessCard business=business locale=locale /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
            <Show when=move || results.with(|r| r.as_ref().is_some_and(|r| r.has_more))>
                <Flex justify=FlexJustify::Center class="load-more">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_more()
                        disabled=Signal::derive(move || loading_more.get())
                    >
                        {move || Msg::LoadMore.text(locale.get())}
                    </Button>
                </Flex>
            </Show>
        </div>
    }
}

