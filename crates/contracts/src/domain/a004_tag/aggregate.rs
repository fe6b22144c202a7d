use crate::shared::locale::Locale;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_ar: String,
    pub slug: String,
    #[serde(rename = "type", default)]
    pub tag_type: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

fn default_active() -> bool {
    true
}

impl Tag {
    pub fn display_name(&self, locale: Locale) -> &str {
        locale
            .pick_opt(Some(self.name.as_str()), Some(self.name_ar.as_str()))
            .unwrap_or(self.slug.as_str())
    }

    pub fn display_description(&self, locale: Locale) -> Option<&str> {
        locale.pick_opt(self.description.as_deref(), self.description_ar.as_deref())
    }
}

/// `GET /tags/{slug}` wraps the tag in its own object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResponse {
    pub tag: Option<Tag>,
}

/// Active tags only, in the order the backend returned them.
pub fn active_tags(tags: Vec<Tag>) -> Vec<Tag> {
    tags.into_iter().filter(|t| t.is_active).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_defaults_and_locale() {
        let tags: Vec<Tag> = serde_json::from_value(json!([
            { "id": 1, "name": "Family", "name_ar": "عائلي", "slug": "family", "type": "feature" },
            { "id": 2, "name": "Old", "slug": "old", "is_active": false }
        ]))
        .unwrap();

        assert_eq!(tags[0].display_name(Locale::Ar), "عائلي");
        assert_eq!(tags[0].display_name(Locale::En), "Family");
        assert_eq!(tags[1].display_name(Locale::Ar), "Old");

        let active = active_tags(tags);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].slug, "family");
    }
}
