//! Base URLs of the two servers the browser talks to.
//!
//! Page payloads come from our backend (same host, port 3000); lazily loaded
//! tab data, reviews and login go straight to the directory API.

/// Directory API used when `DIRECTORY_API_BASE_URL` is not set at build time.
pub const DEFAULT_DIRECTORY_API: &str = "http://localhost:8080/api/v2";

const BACKEND_PORT: u16 = 3000;

/// Our backend: the page's own host on port 3000, or `""` outside a browser.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let scheme = location.protocol().unwrap_or_else(|_| "http:".into());
    let host = location.hostname().unwrap_or_else(|_| "localhost".into());
    format!("{}//{}:{}", scheme, host, BACKEND_PORT)
}

/// `/api/pages/directories` -> `http://host:3000/api/pages/directories`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Directory API base, fixed at compile time.
pub fn directory_base() -> &'static str {
    normalize_base(option_env!("DIRECTORY_API_BASE_URL"))
}

/// Build a full directory API URL from a path such as `/categories`
pub fn directory_url(path: &str) -> String {
    format!("{}{}", directory_base(), path)
}

fn normalize_base(configured: Option<&'static str>) -> &'static str {
    configured
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DIRECTORY_API)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(None), DEFAULT_DIRECTORY_API);
        assert_eq!(normalize_base(Some("  ")), DEFAULT_DIRECTORY_API);
        assert_eq!(
            normalize_base(Some("https://api.example.com/api/v2/")),
            "https://api.example.com/api/v2"
        );
    }
}
