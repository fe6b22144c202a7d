use contracts::domain::a002_business::aggregate::Business;
use contracts::domain::a002_business::details::AboutData;
use contracts::shared::locale::Locale;
use contracts::usecases::u101_business_profile::request::ProfileRoute;
use contracts::usecases::u101_business_profile::response::ProfilePage;
use std::future::Future;
use std::sync::Arc;

use crate::shared::directory::{DirectoryApi, DirectoryResult};

/// Builds the business profile page from the directory API.
///
/// The record is required; every auxiliary collection is fetched only when
/// the business flags it, all of them in parallel, and a failed one renders
/// as empty.
pub async fn load_profile(
    api: Arc<dyn DirectoryApi>,
    route: &ProfileRoute,
    locale: Locale,
) -> DirectoryResult<ProfilePage> {
    let slug = route.slug();
    let business = match route {
        ProfileRoute::Category { category, slug } => {
            api.business_in_category(category, slug, locale).await?
        }
        ProfileRoute::Direct { slug } => api.business(slug, locale).await?,
    };

    spawn_increment_views(api.clone(), slug.to_string());

    let page = match route {
        ProfileRoute::Category { .. } => load_bundled(api.as_ref(), business, slug, locale).await,
        ProfileRoute::Direct { .. } => load_separately(api.as_ref(), business, slug, locale).await,
    };

    tracing::info!(
        "Profile {} loaded: {} branches, {} hours, {} faqs, {} media",
        slug,
        page.about.branches.len(),
        page.about.working_hours.len(),
        page.about.faqs.len(),
        page.media.len()
    );
    Ok(page)
}

/// Category route: one about bundle plus media.
async fn load_bundled(
    api: &dyn DirectoryApi,
    business: Business,
    slug: &str,
    locale: Locale,
) -> ProfilePage {
    let tabs = business.tabs_availability();
    let (about, media) = tokio::join!(
        optional(tabs.needs_about_data(), "about", slug, api.about(slug, locale)),
        optional(tabs.has_media, "media", slug, api.media(slug, locale)),
    );

    ProfilePage::new(business, about.unwrap_or_default(), media.map(|m| m.media))
}

/// Direct route: each collection from its own endpoint.
async fn load_separately(
    api: &dyn DirectoryApi,
    business: Business,
    slug: &str,
    locale: Locale,
) -> ProfilePage {
    let tabs = business.tabs_availability();
    let (hours, faqs, branches, media) = tokio::join!(
        optional(
            tabs.has_working_hours,
            "working_hours",
            slug,
            api.working_hours(slug, locale)
        ),
        optional(tabs.has_faqs, "faqs", slug, api.faqs(slug, locale)),
        optional(tabs.has_branches, "branches", slug, api.branches(slug, locale)),
        optional(tabs.has_media, "media", slug, api.media(slug, locale)),
    );

    let (working_hours, is_open, status_text) = match hours {
        Some(h) => (h.working_hours, Some(h.is_open), Some(h.status_text)),
        None => (Vec::new(), None, None),
    };
    let about = AboutData {
        branches: branches.unwrap_or_default(),
        working_hours,
        faqs: faqs.unwrap_or_default(),
        is_open,
        status_text: status_text.filter(|s| !s.is_empty()),
    };

    ProfilePage::new(business, about, media.map(|m| m.media))
}

/// Runs `fetch` only when `enabled`. `None` means "skipped or failed".
async fn optional<T>(
    enabled: bool,
    what: &str,
    slug: &str,
    fetch: impl Future<Output = DirectoryResult<T>>,
) -> Option<T> {
    if !enabled {
        return None;
    }
    match fetch.await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to load {} for {}: {}", what, slug, e);
            None
        }
    }
}

fn spawn_increment_views(api: Arc<dyn DirectoryApi>, slug: String) {
    tokio::spawn(async move {
        if let Err(e) = api.increment_views(&slug).await {
            tracing::debug!("increment-views for {} ignored: {}", slug, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::directory::fake::{business_with, faq, hours, media, FakeDirectory};
    use contracts::domain::a002_business::tabs::AvailableTabs;

    fn all_tabs() -> AvailableTabs {
        AvailableTabs {
            has_branches: true,
            has_working_hours: true,
            has_faqs: true,
            has_services: true,
            has_media: true,
            has_reviews: true,
        }
    }

    fn category_route() -> ProfileRoute {
        ProfileRoute::Category {
            category: "cafes".into(),
            slug: "bean".into(),
        }
    }

    fn direct_route() -> ProfileRoute {
        ProfileRoute::Direct { slug: "bean".into() }
    }

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_category_route_uses_about_bundle() {
        let fake = Arc::new(FakeDirectory {
            business: Some(business_with(all_tabs())),
            about: AboutData {
                working_hours: vec![hours(3), hours(0)],
                faqs: vec![faq(1, 2, true), faq(2, 1, true), faq(3, 0, false)],
                ..Default::default()
            },
            media: vec![media(1)],
            ..Default::default()
        });

        let page = load_profile(fake.clone(), &category_route(), Locale::Ar)
            .await
            .unwrap();

        assert!(fake.called("business_in_category"));
        assert!(fake.called("about"));
        assert!(fake.called("media"));
        assert!(!fake.called("faqs"));
        assert!(!fake.called("working_hours"));
        assert!(!fake.called("branches"));

        let faq_ids: Vec<i64> = page.about.faqs.iter().map(|f| f.id).collect();
        assert_eq!(faq_ids, vec![2, 1]);
        let days: Vec<u8> = page.about.working_hours.iter().map(|h| h.day).collect();
        assert_eq!(days, vec![0, 3]);
        assert!(page.media_loaded);
        assert_eq!(page.media.len(), 1);
    }

    #[tokio::test]
    async fn test_skips_collections_without_flags() {
        let fake = Arc::new(FakeDirectory {
            business: Some(business_with(AvailableTabs::default())),
            ..Default::default()
        });

        let page = load_profile(fake.clone(), &category_route(), Locale::En)
            .await
            .unwrap();

        assert!(!fake.called("about"));
        assert!(!fake.called("media"));
        assert!(!page.media_loaded);
        assert_eq!(page.about, AboutData::default());
    }

    #[tokio::test]
    async fn test_direct_route_falls_back_per_collection() {
        let fake = Arc::new(
            FakeDirectory {
                business: Some(business_with(AvailableTabs {
                    has_faqs: true,
                    has_working_hours: true,
                    has_media: true,
                    ..Default::default()
                })),
                hours: vec![hours(5), hours(1)],
                media: vec![media(7), media(8)],
                ..Default::default()
            }
            .failing("faqs"),
        );

        let page = load_profile(fake.clone(), &direct_route(), Locale::Ar)
            .await
            .unwrap();

        assert!(fake.called("business"));
        assert!(fake.called("faqs"));
        assert!(!fake.called("branches"));
        assert!(!fake.called("about"));
        assert!(page.about.faqs.is_empty());
        assert_eq!(page.about.working_hours[0].day, 1);
        assert_eq!(page.about.status_text.as_deref(), Some("Open now"));
        assert!(page.is_open());
        assert_eq!(page.media.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_media_is_not_marked_loaded() {
        let fake = Arc::new(
            FakeDirectory {
                business: Some(business_with(all_tabs())),
                ..Default::default()
            }
            .failing("media"),
        );

        let page = load_profile(fake, &category_route(), Locale::Ar).await.unwrap();
        assert!(!page.media_loaded);
        assert!(page.media.is_empty());
    }

    #[tokio::test]
    async fn test_missing_business_is_not_found() {
        let fake = Arc::new(FakeDirectory::default());

        let err = load_profile(fake.clone(), &direct_route(), Locale::Ar)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(fake.calls(), vec!["business".to_string()]);
    }

    #[tokio::test]
    async fn test_views_incremented_in_background() {
        let fake = Arc::new(
            FakeDirectory {
                business: Some(business_with(AvailableTabs::default())),
                ..Default::default()
            }
            .failing("increment_views"),
        );

        // A failing counter never fails the page.
        assert!(load_profile(fake.clone(), &direct_route(), Locale::Ar)
            .await
            .is_ok());
        settle().await;
        assert!(fake.called("increment_views"));
    }
}
