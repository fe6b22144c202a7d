use contracts::domain::a001_category::listing::ListingFilters;
use contracts::domain::a004_tag::aggregate::{active_tags, Tag};
use contracts::shared::locale::Locale;
use contracts::usecases::u102_category_listing::response::CategoryPage;

use crate::shared::directory::{DirectoryApi, DirectoryResult};

/// Builds the category listing page from the directory API.
///
/// Category and businesses are required; tag chips and filter definitions
/// render as empty when their endpoints fail.
pub async fn load_category(
    api: &dyn DirectoryApi,
    slug: &str,
    filters: ListingFilters,
    locale: Locale,
) -> DirectoryResult<CategoryPage> {
    let (category, businesses, tags, filter_defs) = tokio::join!(
        api.category(slug, locale),
        api.category_businesses(slug, &filters, locale),
        api.category_tags(slug, locale),
        api.category_filters(slug, locale),
    );

    let category = category?;
    let businesses = businesses?;
    let tags = tags.unwrap_or_else(|e| {
        tracing::warn!("Failed to load tags for {}: {}", slug, e);
        Vec::new()
    });
    let filter_defs = filter_defs.unwrap_or_else(|e| {
        tracing::warn!("Failed to load filters for {}: {}", slug, e);
        Vec::new()
    });

    let tags = with_selected_tag(api, active_tags(tags), filters.tag.as_deref(), locale).await;

    tracing::info!(
        "Category {} page {}: {} of {} businesses",
        slug,
        businesses.page,
        businesses.items.len(),
        businesses.total
    );

    Ok(CategoryPage {
        category,
        businesses,
        tags,
        filters: filter_defs,
        selected: filters,
    })
}

/// A `?tag=` from a shared link may name a tag the category does not list;
/// it is looked up so its chip can still be shown as selected.
async fn with_selected_tag(
    api: &dyn DirectoryApi,
    mut tags: Vec<Tag>,
    selected: Option<&str>,
    locale: Locale,
) -> Vec<Tag> {
    let Some(selected) = selected else {
        return tags;
    };
    if tags.iter().any(|t| t.slug == selected) {
        return tags;
    }
    match api.tag(selected, locale).await {
        Ok(Some(tag)) => tags.insert(0, tag),
        Ok(None) => tracing::debug!("Selected tag {} does not exist", selected),
        Err(e) => tracing::warn!("Failed to look up tag {}: {}", selected, e),
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::directory::fake::{business_with, category, tag, FakeDirectory};
    use contracts::domain::a001_category::listing::ListingSort;
    use contracts::domain::a002_business::tabs::AvailableTabs;
    use contracts::shared::api::Paged;

    fn fake() -> FakeDirectory {
        FakeDirectory {
            category: Some(category("cafes")),
            businesses: Paged {
                items: vec![business_with(AvailableTabs::default())],
                total: 1,
                ..Default::default()
            },
            tags: vec![tag("family"), tag("outdoor")],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_loads_page_with_filters() {
        let fake = fake();
        let filters = ListingFilters {
            verified: true,
            sort: ListingSort::Views,
            ..Default::default()
        };

        let page = load_category(&fake, "cafes", filters.clone(), Locale::En)
            .await
            .unwrap();

        assert_eq!(page.category.slug, "cafes");
        assert_eq!(page.businesses.items.len(), 1);
        assert_eq!(page.tags.len(), 2);
        assert_eq!(page.selected, filters);
        let sent = fake.last_filters.lock().unwrap().clone();
        assert_eq!(sent, Some(filters));
        assert!(!fake.called("tag"));
    }

    #[tokio::test]
    async fn test_optional_parts_fall_back() {
        let fake = fake().failing("category_tags").failing("category_filters");

        let page = load_category(&fake, "cafes", ListingFilters::default(), Locale::Ar)
            .await
            .unwrap();

        assert!(page.tags.is_empty());
        assert!(page.filters.is_empty());
    }

    #[tokio::test]
    async fn test_required_parts_fail_the_page() {
        let missing = FakeDirectory {
            category: None,
            ..fake()
        };
        let err = load_category(&missing, "nope", ListingFilters::default(), Locale::Ar)
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let broken = fake().failing("category_businesses");
        let err = load_category(&broken, "cafes", ListingFilters::default(), Locale::Ar)
            .await
            .unwrap_err();
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_unlisted_selected_tag_is_looked_up() {
        let fake = FakeDirectory {
            tag: Some(tag("rooftop")),
            ..fake()
        };
        let filters = ListingFilters {
            tag: Some("rooftop".into()),
            ..Default::default()
        };

        let page = load_category(&fake, "cafes", filters, Locale::Ar).await.unwrap();

        assert!(fake.called("tag"));
        assert_eq!(page.tags[0].slug, "rooftop");
        assert_eq!(page.tags.len(), 3);
    }
}
