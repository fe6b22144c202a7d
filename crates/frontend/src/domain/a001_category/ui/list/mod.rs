//! Directories home: category grid and featured sections.

use crate::domain::a005_section::ui::FeaturedSection;
use crate::layout::global_context::use_locale;
use crate::shared::components::page_state::{ErrorMessage, Loading};
use crate::shared::http::get_page;
use crate::shared::i18n::Msg;
use contracts::domain::a001_category::aggregate::Category;
use contracts::shared::locale::Locale;
use contracts::usecases::u103_directories_home::request::page_path;
use contracts::usecases::u103_directories_home::response::DirectoriesPage;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DirectoriesList() -> impl IntoView {
    let locale = use_locale();
    let page = RwSignal::new(Option::<DirectoriesPage>::None);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        let locale = locale.get();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match get_page::<DirectoriesPage>(&page_path(locale)).await {
                Ok(data) => page.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load directories: {}", e);
                    error.set(Some(Msg::LoadFailed.text(locale).to_string()));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="page page--directories">
            {move || {
                let locale = locale.get();
                if loading.get() {
                    return view! { <Loading locale=locale /> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <ErrorMessage message=err /> }.into_any();
                }
                let Some(data) = page.get() else {
                    return ().into_any();
                };

                view! {
                    <h1 class="page__title">{Msg::Categories.text(locale)}</h1>
                    <div class="category-grid">
                        {data
                            .categories
                            .into_iter()
                            .map(|category| view! { <CategoryCard category=category locale=locale /> })
                            .collect_view()}
                    </div>
                    {data
                        .sections
                        .into_iter()
                        .map(|section| view! { <FeaturedSection section=section locale=locale /> })
                        .collect_view()}
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn CategoryCard(category: Category, locale: Locale) -> impl IntoView {
    let href = category.href(locale);
    let name = category.display_name(locale).to_string();
    let description = category.display_description(locale).map(str::to_string);

    view! {
        <a class="category-card" href=href>
            {category.icon.clone().filter(|i| !i.is_empty()).map(|src| view! {
                <img class="category-card__icon" src=src alt="" />
            })}
            <h3 class="category-card__name">{name}</h3>
            {description.map(|d| view! { <p class="category-card__description">{d}</p> })}
            {category.businesses_count.map(|n| view! {
                <span class="category-card__count">{n}</span>
            })}
        </a>
    }
}
