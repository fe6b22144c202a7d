//! Category listing page: header, tag chips, dropdown filters and the
//! business grid with "load more".

use super::filters::TagChips;
use super::view_model::{
    dropdown_label, rating_options, selection_href, sort_options, tag_href,
    verification_options, CategoryListingVm,
};
use crate::layout::global_context::use_locale;
use crate::shared::components::business_card::BusinessCard;
use crate::shared::components::filter_dropdown::FilterDropdown;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::page_state::{ErrorMessage, Loading, NotFound};
use crate::shared::i18n::Msg;
use contracts::domain::a001_category::listing::{FilterParam, ListingFilters};
use contracts::shared::locale::Locale;
use contracts::shared::query::QueryString;
use contracts::usecases::u102_category_listing::response::CategoryPage;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};
use thaw::*;

#[component]
pub fn CategoryListing() -> impl IntoView {
    let vm = CategoryListingVm::new();
    let locale = use_locale();
    let params = use_params_map();
    let location = use_location();

    let category = Memo::new(move |_| {
        params.with(|p| p.get("category").map(|s| s.to_string()).unwrap_or_default())
    });
    let query = Memo::new(move |_| QueryString::parse(&location.search.get()));

    Effect::new(move |_| {
        let filters = ListingFilters::from_query(&query.get());
        vm.load(category.get(), filters, locale.get());
    });

    let navigate = use_navigate();
    let on_select = Callback::new(move |(param, value): (FilterParam, String)| {
        let href = selection_href(
            &location.pathname.get_untracked(),
            &query.get_untracked(),
            param,
            &value,
        );
        navigate(&href, Default::default());
    });
    let chip_href = Callback::new(move |tag: Option<String>| {
        tag_href(
            &location.pathname.get_untracked(),
            &query.get_untracked(),
            tag.as_deref(),
        )
    });

    view! {
        <div class="page page--category">
            {move || {
                let locale = locale.get();
                if vm.loading.get() {
                    return view! { <Loading locale=locale /> }.into_any();
                }
                if vm.not_found.get() {
                    return view! { <NotFound locale=locale /> }.into_any();
                }
                if let Some(err) = vm.error.get() {
                    return view! { <ErrorMessage message=err /> }.into_any();
                }
                match vm.page.get() {
                    Some(page) => view! {
                        <Listing
                            vm=vm
                            page=page
                            locale=locale
                            on_select=on_select
                            chip_href=chip_href
                        />
                    }
                    .into_any(),
                    None => ().into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn Listing(
    vm: CategoryListingVm,
    page: CategoryPage,
    locale: Locale,
    on_select: Callback<(FilterParam, String)>,
    chip_href: Callback<Option<String>, String>,
) -> impl IntoView {
    let CategoryPage {
        category,
        businesses,
        tags,
        filters,
        selected,
    } = page;
    let selected_tag = selected.tag.clone();

    let dropdown = move |param: FilterParam, options| {
        let label = dropdown_label(&filters, param, locale);
        let selected = selected.selected_value(param);
        view! {
            <FilterDropdown
                label=label
                options=options
                selected=Signal::derive(move || selected.clone())
                on_change=Callback::new(move |value: String| on_select.run((param, value)))
            />
        }
    };
    let rating = dropdown(FilterParam::Rating, rating_options(locale));
    let verification = dropdown(FilterParam::Verification, verification_options(locale));
    let sort = dropdown(FilterParam::Sort, sort_options(locale));

    let title = category.display_name(locale).to_string();
    let subtitle = category.display_description(locale).map(str::to_string);
    let is_empty = businesses.items.is_empty();

    view! {
        <PageHeader title=title subtitle=subtitle icon_url=category.icon.clone()>
            <span class="page-header__count">{businesses.total}</span>
        </PageHeader>

        <TagChips
            tags=tags
            selected=selected_tag
            locale=locale
            all_label=Msg::All.text(locale)
            href=chip_href
        />

        <Flex gap=FlexGap::Medium align=FlexAlign::End class="listing-filters">
            {rating}
            {verification}
            {sort}
        </Flex>

        {if is_empty {
            view! { <div class="listing-empty">{Msg::NoBusinesses.text(locale)}</div> }.into_any()
        } else {
            view! {
                <div class="business-grid">
                    {businesses
                        .items
                        .into_iter()
                        .map(|business| view! { <BusinessCard business=business locale=locale /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        }}

        <Show when=move || vm.has_more().get()>
            <div class="listing-more">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.load_more(locale)
                    disabled=Signal::derive(move || vm.loading_more.get())
                >
                    {move || if vm.loading_more.get() {
                        view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                    } else {
                        Msg::LoadMore.text(locale).into_any()
                    }}
                </Button>
            </div>
        </Show>
    }
}
