//! Field deserializers for the directory API's loose JSON.

use serde::{Deserialize, Deserializer};

/// `null` and a missing field both become `T::default()`.
///
/// Use together with `#[serde(default)]`:
/// `#[serde(default, deserialize_with = "null_as_default")]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Debug, Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<u32>,
        #[serde(default, deserialize_with = "null_as_default")]
        counts: BTreeMap<String, u64>,
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
    }

    #[test]
    fn test_null_and_missing_become_empty() {
        let loose: Loose =
            serde_json::from_value(json!({ "items": null, "counts": null, "label": null })).unwrap();
        assert!(loose.items.is_empty());
        assert!(loose.counts.is_empty());
        assert_eq!(loose.label, "");

        let loose: Loose = serde_json::from_value(json!({})).unwrap();
        assert!(loose.items.is_empty());

        let loose: Loose = serde_json::from_value(json!({ "items": [1, 2] })).unwrap();
        assert_eq!(loose.items, vec![1, 2]);
    }
}
