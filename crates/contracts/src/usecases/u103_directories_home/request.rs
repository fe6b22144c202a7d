use crate::shared::locale::Locale;

pub fn page_path(locale: Locale) -> String {
    format!("/api/pages/directories?locale={}", locale)
}
