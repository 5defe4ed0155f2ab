//! Instance address normalization.
//!
//! Turns whatever the user typed into a canonical `scheme://netloc` origin.
//! Normalization never fails; garbage in yields a (possibly degenerate) origin.

use std::fmt;

/// Scheme used when the input carries neither `http://` nor `https://`.
const DEFAULT_SCHEME: &str = "https";

/// Normalized instance address: scheme plus host and optional port.
///
/// Never carries a path, query, fragment, or trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin(String);

impl Origin {
    /// Normalizes a raw address.
    ///
    /// # Examples
    ///
    /// - `Origin::normalize("chat.example.com")` → `https://chat.example.com`
    /// - `Origin::normalize("http://host:8080/a?b#c")` → `http://host:8080`
    pub fn normalize(raw: &str) -> Self {
        let (scheme, rest) = if let Some(rest) = raw.strip_prefix("http://") {
            ("http", rest)
        } else if let Some(rest) = raw.strip_prefix("https://") {
            ("https", rest)
        } else {
            (DEFAULT_SCHEME, raw)
        };
        let netloc = match rest.find(['/', '?', '#']) {
            Some(end) => &rest[..end],
            None => rest,
        };

        Origin(format!("{}://{}", scheme, netloc))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(
            Origin::normalize("chat.example.com").as_str(),
            "https://chat.example.com"
        );
        assert_eq!(
            Origin::normalize("localhost:3000").as_str(),
            "https://localhost:3000"
        );
    }

    #[test]
    fn existing_scheme_preserved() {
        assert_eq!(
            Origin::normalize("http://chat.example.com").as_str(),
            "http://chat.example.com"
        );
        assert_eq!(
            Origin::normalize("https://chat.example.com").as_str(),
            "https://chat.example.com"
        );
    }

    #[test]
    fn strips_path_query_fragment() {
        for raw in [
            "https://chat.example.com/",
            "https://chat.example.com/workspace/models",
            "https://chat.example.com?models=x",
            "https://chat.example.com#top",
            "chat.example.com/c/123?x=1#frag",
        ] {
            assert_eq!(
                Origin::normalize(raw).as_str(),
                "https://chat.example.com",
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn keeps_port() {
        let origin = Origin::normalize("https://chat.example.com:8080/");
        assert_eq!(origin.as_str(), "https://chat.example.com:8080");
        assert_eq!(
            Origin::normalize("http://10.0.0.5:3000/api").as_str(),
            "http://10.0.0.5:3000"
        );
    }

    #[test]
    fn empty_input_is_degenerate_not_rejected() {
        let origin = Origin::normalize("");
        assert_eq!(origin.as_str(), "https://");
    }

    #[test]
    fn scheme_match_is_case_sensitive() {
        assert_eq!(Origin::normalize("HTTP://host/x").as_str(), "https://HTTP:");
    }
}
