use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Header carrying the preferred response language. Takes precedence over
/// `Accept-Language` on the directory API.
pub const LANGUAGE_HEADER: &str = "X-Language";
pub const ACCEPT_LANGUAGE_HEADER: &str = "Accept-Language";

/// UI / content language of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ar, Locale::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Parses a path segment, falling back to Arabic for anything unknown.
    pub fn from_segment(segment: &str) -> Self {
        segment.parse().unwrap_or_default()
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Value for the `dir` attribute of the document.
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Picks the Arabic or English variant of a bilingual field.
    pub fn pick<'a>(&self, en: &'a str, ar: &'a str) -> &'a str {
        match self {
            Locale::Ar => ar,
            Locale::En => en,
        }
    }

    /// Same as [`Locale::pick`] for optional fields; falls back to the other
    /// language when the preferred one is missing or empty.
    pub fn pick_opt<'a>(&self, en: Option<&'a str>, ar: Option<&'a str>) -> Option<&'a str> {
        let (first, second) = match self {
            Locale::Ar => (ar, en),
            Locale::En => (en, ar),
        };
        first
            .filter(|s| !s.is_empty())
            .or(second.filter(|s| !s.is_empty()))
    }

    /// Open Graph style locale tag.
    pub fn og_tag(&self) -> &'static str {
        match self {
            Locale::Ar => "ar_AR",
            Locale::En => "en_US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale: {}", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Replaces the leading locale segment of an app path, e.g.
/// `/ar/directories/food` -> `/en/directories/food`.
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };

    let tail = if first.parse::<Locale>().is_ok() {
        rest.unwrap_or("")
    } else {
        trimmed
    };

    if tail.is_empty() {
        format!("/{}", target)
    } else {
        format!("/{}/{}", target, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("ar".parse::<Locale>(), Ok(Locale::Ar));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::from_segment("fr"), Locale::Ar);
    }

    #[test]
    fn test_pick_opt_falls_back() {
        assert_eq!(Locale::Ar.pick_opt(Some("About"), None), Some("About"));
        assert_eq!(Locale::Ar.pick_opt(Some("About"), Some("")), Some("About"));
        assert_eq!(Locale::En.pick_opt(Some("About"), Some("عن")), Some("About"));
        assert_eq!(Locale::En.pick_opt(None, None), None);
    }

    #[test]
    fn test_switch_locale_path() {
        assert_eq!(
            switch_locale_path("/ar/directories/food/pizza", Locale::En),
            "/en/directories/food/pizza"
        );
        assert_eq!(switch_locale_path("/en", Locale::Ar), "/ar");
        assert_eq!(switch_locale_path("/", Locale::En), "/en");
        assert_eq!(
            switch_locale_path("/directories", Locale::En),
            "/en/directories"
        );
    }

    #[test]
    fn test_direction() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
    }
}
