//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::config::config;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location and the
/// configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config().api_port)
}

/// Build a full API URL from a resource path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/pppoe-patterns");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), &config().api_prefix, path)
}

/// Path segment with reserved characters escaped.
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn join_url(base: &str, prefix: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{}{}/{}", base.trim_end_matches('/'), prefix, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://host:3000", "/api", "/pppoe-patterns"),
            "http://host:3000/api/pppoe-patterns"
        );
        assert_eq!(join_url("http://host:3000/", "", "cities"), "http://host:3000/cities");
    }

    #[test]
    fn test_segment_escapes() {
        assert_eq!(segment("2024/001 A"), "2024%2F001%20A");
    }
}
