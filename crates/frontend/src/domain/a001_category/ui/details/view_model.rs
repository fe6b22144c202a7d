//! ViewModel for the category listing

use super::model::{fetch_businesses, fetch_page};
use crate::shared::components::filter_dropdown::SelectOption;
use crate::shared::i18n::Msg;
use contracts::domain::a001_category::listing::{
    apply_selection, FilterParam, ListingFilters, ListingSort, VerificationFilter, ALL,
    RATING_OPTIONS,
};
use contracts::domain::a007_filter::aggregate::Filter;
use contracts::shared::locale::Locale;
use contracts::shared::query::QueryString;
use contracts::usecases::u102_category_listing::response::CategoryPage;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CategoryListingVm {
    pub page: RwSignal<Option<CategoryPage>>,
    pub loading: RwSignal<bool>,
    pub loading_more: RwSignal<bool>,
    pub not_found: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Id of the latest `load`; older responses are dropped.
    request: StoredValue<u32>,
}

impl CategoryListingVm {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(None),
            loading: RwSignal::new(true),
            loading_more: RwSignal::new(false),
            not_found: RwSignal::new(false),
            error: RwSignal::new(None),
            request: StoredValue::new(0),
        }
    }

    pub fn load(&self, category: String, filters: ListingFilters, locale: Locale) {
        let vm = *self;
        let request = vm.request.get_value().wrapping_add(1);
        vm.request.set_value(request);
        vm.loading.set(true);
        vm.not_found.set(false);
        vm.error.set(None);

        spawn_local(async move {
            let result = fetch_page(&category, &filters, locale).await;
            if vm.request.get_value() != request {
                return;
            }
            match result {
                Ok(data) => vm.page.set(Some(data)),
                Err(e) if e.is_not_found() => {
                    vm.page.set(None);
                    vm.not_found.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load category {}: {}", category, e);
                    vm.page.set(None);
                    vm.error.set(Some(Msg::LoadFailed.text(locale).to_string()));
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn has_more(&self) -> Signal<bool> {
        let page = self.page;
        Signal::derive(move || {
            page.with(|p| p.as_ref().map(|p| p.businesses.has_more).unwrap_or(false))
        })
    }

    pub fn load_more(&self, locale: Locale) {
        if self.loading_more.get_untracked() {
            return;
        }
        let Some((category, next)) = self.page.with_untracked(|p| {
            p.as_ref()
                .filter(|p| p.businesses.has_more)
                .map(|p| (p.category.slug.clone(), p.selected.next_page()))
        }) else {
            return;
        };

        let vm = *self;
        let request = vm.request.get_value();
        vm.loading_more.set(true);

        spawn_local(async move {
            match fetch_businesses(&category, &next, locale).await {
                Ok(more) if vm.request.get_value() == request => {
                    vm.page.update(|p| {
                        if let Some(p) = p {
                            p.extend(more);
                        }
                    });
                }
                Ok(_) => {}
                Err(e) => log::error!("Failed to load more businesses: {}", e),
            }
            vm.loading_more.set(false);
        });
    }
}

impl Default for CategoryListingVm {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// URL state
// ============================================================================

/// Listing URL after picking `value` in one of the dropdowns; paging restarts.
pub fn selection_href(path: &str, query: &QueryString, param: FilterParam, value: &str) -> String {
    let mut next = apply_selection(query, param, value);
    next.remove("page");
    next.to_url(path)
}

/// Listing URL for a tag chip; `None` is the "All" chip.
pub fn tag_href(path: &str, query: &QueryString, tag: Option<&str>) -> String {
    let mut next = query.clone();
    match tag {
        Some(tag) => next.set("tag", tag),
        None => next.remove("tag"),
    };
    next.remove("page");
    next.to_url(path)
}

// ============================================================================
// Dropdown options
// ============================================================================

pub fn rating_options(locale: Locale) -> Vec<SelectOption> {
    RATING_OPTIONS
        .iter()
        .map(|value| {
            let label = if *value == ALL {
                Msg::AllRatings.text(locale).to_string()
            } else {
                format!("{}+ ★", value)
            };
            (value.to_string(), label)
        })
        .collect()
}

pub fn verification_options(locale: Locale) -> Vec<SelectOption> {
    VerificationFilter::ALL
        .iter()
        .map(|v| {
            let msg = match v {
                VerificationFilter::All => Msg::AllBusinesses,
                VerificationFilter::Verified => Msg::Verified,
                VerificationFilter::Featured => Msg::Featured,
                VerificationFilter::Both => Msg::VerifiedAndFeatured,
            };
            (v.as_str().to_string(), msg.text(locale).to_string())
        })
        .collect()
}

pub fn sort_options(locale: Locale) -> Vec<SelectOption> {
    ListingSort::ALL
        .iter()
        .map(|s| {
            let msg = match s {
                ListingSort::Rating => Msg::SortRating,
                ListingSort::Newest => Msg::SortNewest,
                ListingSort::Views => Msg::SortViews,
                ListingSort::Name => Msg::SortName,
            };
            (s.as_str().to_string(), msg.text(locale).to_string())
        })
        .collect()
}

/// Dropdown caption: the category's own filter definition wins over ours.
pub fn dropdown_label(filters: &[Filter], param: FilterParam, locale: Locale) -> String {
    filters
        .iter()
        .find(|f| f.slug == param.param_name() && !f.label.is_empty())
        .map(|f| f.label.clone())
        .unwrap_or_else(|| {
            let msg = match param {
                FilterParam::Rating => Msg::Rating,
                FilterParam::Verification => Msg::Verification,
                FilterParam::Sort => Msg::SortBy,
            };
            msg.text(locale).to_string()
        })
}
