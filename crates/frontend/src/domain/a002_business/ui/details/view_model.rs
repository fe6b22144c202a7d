//! ViewModel for the business profile (tab controller)

use super::model::*;
use crate::shared::clipboard::share_link;
use crate::shared::i18n::Msg;
use contracts::domain::a002_business::details::{next_index, previous_index, BusinessMedia};
use contracts::domain::a002_business::tabs::{default_tab_slug, ProfileTab};
use contracts::domain::a003_review::aggregate::{Review, REVIEWS_PAGE_SIZE};
use contracts::domain::a003_review::summary::ReviewSummary;
use contracts::domain::a006_for_sale::aggregate::{ForSaleListing, ForSaleService, ListingsQuery};
use contracts::shared::locale::Locale;
use contracts::usecases::u101_business_profile::request::ProfileRoute;
use contracts::usecases::u101_business_profile::response::ProfilePage;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the "link copied" notice stays up.
const SHARE_NOTICE_MS: u32 = 2_000;

/// Fetch state of one lazily loaded tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LazyState {
    pub loaded: bool,
    pub loading: bool,
}

impl LazyState {
    pub fn needs_fetch(self) -> bool {
        !self.loaded && !self.loading
    }

    /// Forces the next activation to fetch again (after a new review).
    pub fn invalidated(self) -> Self {
        Self {
            loaded: false,
            ..self
        }
    }
}

/// Tab whose data must be fetched now that `active` is shown. About comes
/// with the page payload and is never fetched here.
pub fn pending_fetch(
    active: Option<ProfileTab>,
    state_of: impl Fn(ProfileTab) -> LazyState,
) -> Option<ProfileTab> {
    match active? {
        ProfileTab::About => None,
        tab => state_of(tab).needs_fetch().then_some(tab),
    }
}

#[derive(Clone, Copy)]
pub struct BusinessDetailsVm {
    pub locale: RwSignal<Locale>,
    pub profile: RwSignal<Option<ProfilePage>>,
    pub loading: RwSignal<bool>,
    pub not_found: RwSignal<bool>,
    pub error: RwSignal<Option<Msg>>,

    pub active_tab: RwSignal<String>,

    pub services: RwSignal<Vec<ForSaleService>>,
    pub listings: RwSignal<Vec<ForSaleListing>>,
    pub services_loaded: RwSignal<bool>,
    pub services_loading: RwSignal<bool>,
    pub services_error: RwSignal<Option<Msg>>,

    pub media: RwSignal<Vec<BusinessMedia>>,
    pub media_loaded: RwSignal<bool>,
    pub media_loading: RwSignal<bool>,
    pub media_error: RwSignal<Option<Msg>>,
    /// Index of the media item open in the lightbox.
    pub lightbox: RwSignal<Option<usize>>,

    pub reviews: RwSignal<Vec<Review>>,
    pub summary: RwSignal<Option<ReviewSummary>>,
    pub reviews_loaded: RwSignal<bool>,
    pub reviews_loading: RwSignal<bool>,
    pub reviews_error: RwSignal<Option<Msg>>,
    pub review_modal_open: RwSignal<bool>,

    /// Local only; nothing is sent to the server.
    pub following: RwSignal<bool>,
    pub share_notice: RwSignal<bool>,
    /// Id of the latest `load`; older responses are dropped.
    request: StoredValue<u32>,
}

impl BusinessDetailsVm {
    pub fn new() -> Self {
        Self {
            locale: RwSignal::new(Locale::default()),
            profile: RwSignal::new(None),
            loading: RwSignal::new(true),
            not_found: RwSignal::new(false),
            error: RwSignal::new(None),

            active_tab: RwSignal::new(ProfileTab::About.slug().to_string()),

            services: RwSignal::new(Vec::new()),
            listings: RwSignal::new(Vec::new()),
            services_loaded: RwSignal::new(false),
            services_loading: RwSignal::new(false),
            services_error: RwSignal::new(None),

            media: RwSignal::new(Vec::new()),
            media_loaded: RwSignal::new(false),
            media_loading: RwSignal::new(false),
            media_error: RwSignal::new(None),
            lightbox: RwSignal::new(None),

            reviews: RwSignal::new(Vec::new()),
            summary: RwSignal::new(None),
            reviews_loaded: RwSignal::new(false),
            reviews_loading: RwSignal::new(false),
            reviews_error: RwSignal::new(None),
            review_modal_open: RwSignal::new(false),

            following: RwSignal::new(false),
            share_notice: RwSignal::new(false),
            request: StoredValue::new(0),
        }
    }

    /// Slug of the loaded business, if any.
    pub fn slug(&self) -> Option<String> {
        self.profile
            .with_untracked(|p| p.as_ref().map(|p| p.business.slug.clone()))
    }

    /// False once `load` ran again (another business or another locale).
    fn is_current(&self, request: u32) -> bool {
        self.request.get_value() == request
    }

    fn flags(&self, tab: ProfileTab) -> Option<(RwSignal<bool>, RwSignal<bool>)> {
        match tab {
            ProfileTab::About => None,
            ProfileTab::Services => Some((self.services_loaded, self.services_loading)),
            ProfileTab::Media => Some((self.media_loaded, self.media_loading)),
            ProfileTab::Reviews => Some((self.reviews_loaded, self.reviews_loading)),
        }
    }

    /// Tracked read, for effects.
    pub fn lazy_state(&self, tab: ProfileTab) -> LazyState {
        self.flags(tab)
            .map(|(loaded, loading)| LazyState {
                loaded: loaded.get(),
                loading: loading.get(),
            })
            .unwrap_or_default()
    }

    fn lazy_state_untracked(&self, tab: ProfileTab) -> LazyState {
        self.flags(tab)
            .map(|(loaded, loading)| LazyState {
                loaded: loaded.get_untracked(),
                loading: loading.get_untracked(),
            })
            .unwrap_or_default()
    }

    pub fn set_tab(&self, tab: &str) {
        self.active_tab.set(tab.to_string());
    }

    fn reset_tabs(&self) {
        self.services.set(Vec::new());
        self.listings.set(Vec::new());
        self.services_loaded.set(false);
        self.services_loading.set(false);
        self.services_error.set(None);
        self.media.set(Vec::new());
        self.media_loaded.set(false);
        self.media_loading.set(false);
        self.media_error.set(None);
        self.lightbox.set(None);
        self.reviews.set(Vec::new());
        self.summary.set(None);
        self.reviews_loaded.set(false);
        self.reviews_loading.set(false);
        self.reviews_error.set(None);
        self.review_modal_open.set(false);
        self.following.set(false);
    }

    pub fn load(&self, route: ProfileRoute, locale: Locale) {
        let vm = *self;
        let request = vm.request.get_value().wrapping_add(1);
        vm.request.set_value(request);
        vm.locale.set(locale);
        vm.loading.set(true);
        vm.not_found.set(false);
        vm.error.set(None);
        vm.profile.set(None);
        vm.reset_tabs();

        spawn_local(async move {
            let result = fetch_profile(&route, locale).await;
            if !vm.is_current(request) {
                return;
            }
            match result {
                Ok(page) => {
                    vm.active_tab.set(default_tab_slug(&page.business.tabs));
                    if page.media_loaded {
                        vm.media.set(page.media.clone());
                        vm.media_loaded.set(true);
                    }
                    vm.profile.set(Some(page));
                }
                Err(e) if e.is_not_found() => {
                    vm.profile.set(None);
                    vm.not_found.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load business {}: {}", route.slug(), e);
                    vm.profile.set(None);
                    vm.error.set(Some(Msg::LoadFailed));
                }
            }
            vm.loading.set(false);
        });
    }

    // ========================================================================
    // Lazy tabs
    // ========================================================================

    pub fn load_services(&self) {
        if !self.lazy_state_untracked(ProfileTab::Services).needs_fetch() {
            return;
        }
        let Some(slug) = self.slug() else {
            return;
        };

        let vm = *self;
        let locale = vm.locale.get_untracked();
        let request = vm.request.get_value();
        vm.services_loading.set(true);
        vm.services_error.set(None);

        spawn_local(async move {
            let result = fetch_services(&slug, locale).await;
            if !vm.is_current(request) {
                return;
            }
            match result {
                Ok(resp) => {
                    vm.services.set(resp.services);
                    vm.services_loaded.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load services: {}", e);
                    vm.services_error.set(Some(Msg::FailedServices));
                }
            }
            vm.services_loading.set(false);

            // Listings are an extra; a failure only hides them.
            match fetch_for_sale_listings(&slug, &ListingsQuery::default(), locale).await {
                Ok(resp) if vm.is_current(request) => vm.listings.set(resp.listings),
                Ok(_) => {}
                Err(e) => log::warn!("Failed to load for-sale listings: {}", e),
            }
        });
    }

    pub fn load_media(&self) {
        if !self.lazy_state_untracked(ProfileTab::Media).needs_fetch() {
            return;
        }
        let Some(slug) = self.slug() else {
            return;
        };

        let vm = *self;
        let locale = vm.locale.get_untracked();
        let request = vm.request.get_value();
        vm.media_loading.set(true);
        vm.media_error.set(None);

        spawn_local(async move {
            let result = fetch_media(&slug, locale).await;
            if !vm.is_current(request) {
                return;
            }
            match result {
                Ok(resp) => {
                    vm.media.set(resp.media);
                    vm.media_loaded.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load media: {}", e);
                    vm.media_error.set(Some(Msg::FailedMedia));
                }
            }
            vm.media_loading.set(false);
        });
    }

    pub fn load_reviews(&self) {
        if !self.lazy_state_untracked(ProfileTab::Reviews).needs_fetch() {
            return;
        }
        let Some(slug) = self.slug() else {
            return;
        };

        let vm = *self;
        let locale = vm.locale.get_untracked();
        let request = vm.request.get_value();
        vm.reviews_loading.set(true);
        vm.reviews_error.set(None);

        let summary_slug = slug.clone();
        spawn_local(async move {
            match fetch_review_summary(&summary_slug, locale).await {
                Ok(summary) if vm.is_current(request) => vm.summary.set(Some(summary)),
                Ok(_) => {}
                Err(e) => log::error!("Failed to load review summary: {}", e),
            }
        });

        spawn_local(async move {
            let result = fetch_reviews(&slug, 1, REVIEWS_PAGE_SIZE, locale).await;
            if !vm.is_current(request) {
                return;
            }
            match result {
                Ok(page) => {
                    vm.reviews.set(page.items);
                    vm.reviews_loaded.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load reviews: {}", e);
                    vm.reviews_error.set(Some(Msg::FailedReviews));
                }
            }
            vm.reviews_loading.set(false);
        });
    }

    /// After a review was posted: list and summary are fetched again.
    pub fn reload_reviews(&self) {
        let state = self.lazy_state_untracked(ProfileTab::Reviews).invalidated();
        self.reviews_loaded.set(state.loaded);
        self.load_reviews();
    }

    // ========================================================================
    // Lightbox
    // ========================================================================

    pub fn open_lightbox(&self, index: usize) {
        self.lightbox.set(Some(index));
    }

    pub fn close_lightbox(&self) {
        self.lightbox.set(None);
    }

    pub fn lightbox_previous(&self) {
        self.lightbox.update(|i| {
            if let Some(i) = i {
                *i = previous_index(*i);
            }
        });
    }

    pub fn lightbox_next(&self) {
        let len = self.media.with_untracked(Vec::len);
        self.lightbox.update(|i| {
            if let Some(i) = i {
                *i = next_index(*i, len);
            }
        });
    }

    // ========================================================================
    // Sidebar actions
    // ========================================================================

    pub fn toggle_follow(&self) {
        self.following.update(|f| *f = !*f);
    }

    pub fn share(&self) {
        let Some(title) = self
            .profile
            .with_untracked(|p| p.as_ref().map(|p| p.business.title(self.locale.get_untracked()).to_string()))
        else {
            return;
        };
        let Some(url) = web_sys::window().and_then(|w| w.location().href().ok()) else {
            return;
        };

        let notice = self.share_notice;
        share_link(&title, &url, move || {
            notice.set(true);
            spawn_local(async move {
                TimeoutFuture::new(SHARE_NOTICE_MS).await;
                notice.set(false);
            });
        });
    }
}

impl Default for BusinessDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

/// `/directories/businesses/{slug}` and a missing category both mean the
/// direct route.
pub fn profile_route(category: Option<&str>, slug: &str) -> ProfileRoute {
    match category.filter(|c| !c.is_empty() && *c != "businesses") {
        Some(category) => ProfileRoute::Category {
            category: category.to_string(),
            slug: slug.to_string(),
        },
        None => ProfileRoute::Direct {
            slug: slug.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(services: LazyState, media: LazyState, reviews: LazyState) -> impl Fn(ProfileTab) -> LazyState {
        move |tab| match tab {
            ProfileTab::About => LazyState::default(),
            ProfileTab::Services => services,
            ProfileTab::Media => media,
            ProfileTab::Reviews => reviews,
        }
    }

    const IDLE: LazyState = LazyState { loaded: false, loading: false };
    const LOADING: LazyState = LazyState { loaded: false, loading: true };
    const LOADED: LazyState = LazyState { loaded: true, loading: false };

    #[test]
    fn test_lazy_tab_fetched_once() {
        let fresh = states(IDLE, IDLE, IDLE);
        assert_eq!(pending_fetch(Some(ProfileTab::Services), &fresh), Some(ProfileTab::Services));
        assert_eq!(pending_fetch(Some(ProfileTab::Reviews), &fresh), Some(ProfileTab::Reviews));
        assert_eq!(pending_fetch(Some(ProfileTab::About), &fresh), None);
        assert_eq!(pending_fetch(None, &fresh), None);

        // in flight or done: switching back does not fetch again
        let busy = states(LOADING, LOADED, LOADED);
        assert_eq!(pending_fetch(Some(ProfileTab::Services), &busy), None);
        assert_eq!(pending_fetch(Some(ProfileTab::Media), &busy), None);
        assert_eq!(pending_fetch(Some(ProfileTab::Reviews), &busy), None);
    }

    #[test]
    fn test_preloaded_media_not_fetched() {
        let preloaded = states(IDLE, LOADED, IDLE);
        assert_eq!(pending_fetch(Some(ProfileTab::Media), &preloaded), None);
    }

    #[test]
    fn test_submitted_review_refetches() {
        let after_submit = LOADED.invalidated();
        assert!(after_submit.needs_fetch());
        assert_eq!(
            pending_fetch(Some(ProfileTab::Reviews), &states(LOADED, LOADED, after_submit)),
            Some(ProfileTab::Reviews)
        );
        // a fetch already running is not doubled
        assert!(!LOADING.invalidated().needs_fetch());
    }

    #[test]
    fn test_profile_route() {
        assert_eq!(
            profile_route(Some("restaurants"), "bean"),
            ProfileRoute::Category {
                category: "restaurants".into(),
                slug: "bean".into()
            }
        );
        assert_eq!(
            profile_route(Some("businesses"), "bean"),
            ProfileRoute::Direct { slug: "bean".into() }
        );
        assert_eq!(
            profile_route(None, "bean"),
            ProfileRoute::Direct { slug: "bean".into() }
        );
    }
}
