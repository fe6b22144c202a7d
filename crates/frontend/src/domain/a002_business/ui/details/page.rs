//! Business profile page (MVVM Standard)

use super::sidebar::Sidebar;
use super::tabs::{AboutTab, MediaTab, ReviewsTab, ServicesTab};
use super::view_model::{pending_fetch, profile_route, BusinessDetailsVm};
use crate::domain::a003_review::ui::AddReviewModal;
use crate::layout::global_context::use_locale;
use crate::shared::components::page_state::{ErrorMessage, Loading, NotFound};
use crate::shared::i18n::Msg;
use contracts::domain::a002_business::tabs::{enabled_tabs, BusinessTab, ProfileTab, TabType};
use contracts::shared::locale::Locale;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

#[component]
pub fn BusinessDetail() -> impl IntoView {
    let vm = BusinessDetailsVm::new();
    let locale = use_locale();
    let params = use_params_map();

    let route = Memo::new(move |_| {
        params.with(|p| {
            let slug = p.get("slug").map(|s| s.to_string()).unwrap_or_default();
            profile_route(p.get("category").as_deref(), &slug)
        })
    });

    Effect::new(move |_| {
        vm.load(route.get(), locale.get());
    });

    // Lazy tabs load on first activation
    Effect::new(move || {
        if vm.profile.with(Option::is_none) {
            return;
        }
        let active = ProfileTab::from_slug(&vm.active_tab.get());
        match pending_fetch(active, |tab| vm.lazy_state(tab)) {
            Some(ProfileTab::Services) => vm.load_services(),
            Some(ProfileTab::Media) => vm.load_media(),
            Some(ProfileTab::Reviews) => vm.load_reviews(),
            _ => {}
        }
    });

    view! {
        <div class="page page--detail page--business">
            {move || {
                let locale = locale.get();
                if vm.loading.get() {
                    return view! { <Loading locale=locale /> }.into_any();
                }
                if vm.not_found.get() {
                    return view! { <NotFound locale=locale msg=Msg::BusinessNotFound /> }.into_any();
                }
                if let Some(err) = vm.error.get() {
                    return view! { <ErrorMessage message=err.text(locale) /> }.into_any();
                }
                if vm.profile.with(Option::is_none) {
                    return view! { <NotFound locale=locale msg=Msg::BusinessNotFound /> }.into_any();
                }
                view! {
                    <div class="business-profile">
                        <Sidebar vm=vm locale=locale />
                        <div class="business-profile__main tabs__content">
                            <TabBar vm=vm />
                            <TabContent vm=vm locale=locale />
                        </div>
                    </div>
                }
                .into_any()
            }}
            <AddReviewModal
                open=vm.review_modal_open
                slug=Signal::derive(move || vm.slug().unwrap_or_default())
                locale=locale
                on_submitted=Callback::new(move |_| vm.reload_reviews())
            />
        </div>
    }
}

#[component]
fn TabBar(vm: BusinessDetailsVm) -> impl IntoView {
    let active_tab = vm.active_tab;
    let tabs = vm
        .profile
        .with_untracked(|p| p.as_ref().map(|p| enabled_tabs(&p.business.tabs)))
        .unwrap_or_default();

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center class="business-tabs" attr:role="tablist">
            {tabs
                .into_iter()
                .map(|tab| {
                    let slug = StoredValue::new(tab.slug);
                    view! {
                        <Button
                            appearance=Signal::derive(move || {
                                if active_tab.with(|t| *t == slug.get_value()) {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            })
                            size=ButtonSize::Small
                            on_click=move |_| vm.set_tab(&slug.get_value())
                        >
                            {tab.label}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
    }
}

#[component]
fn TabContent(vm: BusinessDetailsVm, locale: Locale) -> impl IntoView {
    let active = move || {
        let slug = vm.active_tab.get();
        vm.profile.with(|p| {
            p.as_ref()
                .and_then(|p| p.business.tabs.iter().find(|t| t.slug == slug).cloned())
        })
    };

    view! {
        <div class="business-tabs__panel" role="tabpanel">
            {move || {
                let tab = active();
                match tab.as_ref().and_then(BusinessTab::kind).or_else(|| {
                    ProfileTab::from_slug(&vm.active_tab.get())
                }) {
                    Some(ProfileTab::About) => view! { <AboutTab vm=vm locale=locale /> }.into_any(),
                    Some(ProfileTab::Services) => view! { <ServicesTab vm=vm locale=locale /> }.into_any(),
                    Some(ProfileTab::Media) => view! { <MediaTab vm=vm locale=locale /> }.into_any(),
                    Some(ProfileTab::Reviews) => view! { <ReviewsTab vm=vm locale=locale /> }.into_any(),
                    None => match tab {
                        Some(BusinessTab { tab_type: TabType::Webview, webview_url: Some(url), label, .. }) => {
                            view! {
                                <iframe class="business-tabs__webview" src=url title=label></iframe>
                            }
                            .into_any()
                        }
                        _ => ().into_any(),
                    },
                }
            }}
        </div>
    }
}
