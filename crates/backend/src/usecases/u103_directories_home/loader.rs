use contracts::shared::locale::Locale;
use contracts::usecases::u103_directories_home::response::DirectoriesPage;

use crate::shared::directory::{DirectoryApi, DirectoryResult};

/// Categories are required; featured sections are optional.
pub async fn load_directories(
    api: &dyn DirectoryApi,
    locale: Locale,
) -> DirectoryResult<DirectoriesPage> {
    let (categories, sections) = tokio::join!(api.categories(locale), api.sections(locale));

    let categories = categories?;
    let sections = sections.unwrap_or_else(|e| {
        tracing::warn!("Failed to load sections: {}", e);
        Vec::new()
    });

    Ok(DirectoriesPage {
        categories,
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::directory::fake::{category, FakeDirectory};

    #[tokio::test]
    async fn test_sections_are_optional() {
        let fake = FakeDirectory {
            categories: vec![category("cafes"), category("gyms")],
            ..Default::default()
        }
        .failing("sections");

        let page = load_directories(&fake, Locale::Ar).await.unwrap();
        assert_eq!(page.categories.len(), 2);
        assert!(page.sections.is_empty());
        assert!(fake.called("categories"));
    }

    #[tokio::test]
    async fn test_categories_are_required() {
        let fake = FakeDirectory::default().failing("categories");
        assert!(load_directories(&fake, Locale::En).await.is_err());
    }
}
