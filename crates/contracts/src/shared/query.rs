//! Ordered query-string pairs on top of `serde_urlencoded`.
//!
//! Order of insertion is preserved so that URLs are stable (tests and
//! upstream caches both depend on it).

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `a=1&b=two` (a leading `?` is ignored). Repeated keys are kept
    /// in order; a malformed query parses as empty.
    pub fn parse(raw: &str) -> Self {
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(raw.trim_start_matches('?'))
            .unwrap_or_default();
        Self { pairs }
    }

    pub fn append(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn append_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.append(key, value);
        }
        self
    }

    /// Replaces every value of `key` with a single one, keeping the position
    /// of the first occurrence.
    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.pairs.retain(|(k, _)| k != key);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Appends `?query` to `path` unless the query is empty.
    pub fn to_url(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self)
        }
    }
}

impl std::fmt::Display for QueryString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = serde_urlencoded::to_string(&self.pairs).map_err(|_| std::fmt::Error)?;
        f.write_str(&encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_encode() {
        let mut q = QueryString::new();
        q.append("page", 1).append("q", "pizza & pasta");
        assert_eq!(q.to_string(), "page=1&q=pizza+%26+pasta");
        assert_eq!(QueryString::new().to_url("/x"), "/x");
    }

    #[test]
    fn test_parse_roundtrip_arabic() {
        let q = QueryString::parse("?tag=%D9%85%D8%B7%D8%B9%D9%85&sort=rating");
        assert_eq!(q.get("tag"), Some("مطعم"));
        assert_eq!(q.get("sort"), Some("rating"));
        assert_eq!(q.get("page"), None);

        let q = QueryString::parse("q=coffee+shop&q=tea");
        assert_eq!(q.get("q"), Some("coffee shop"));
        assert_eq!(q.pairs().len(), 2);
        assert!(QueryString::parse("").is_empty());
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut q = QueryString::parse("a=1&b=2&a=3");
        q.set("a", "9");
        assert_eq!(q.to_string(), "a=9&b=2");
        q.remove("a");
        assert_eq!(q.to_string(), "b=2");
    }
}
