// src/credentials.rs
// Google API key detection

/// Every Google API key starts with this marker
pub const GOOGLE_KEY_MARKER: &str = "AIzaSy";

/// Find a Google API key embedded in `input`.
///
/// Returns the whole key token starting at the first `AIzaSy` marker and
/// running over the key alphabet (ASCII alphanumerics, `-` and `_`), or
/// `None` when the marker is absent.
pub fn find_google_api_key(input: &str) -> Option<&str> {
    let start = input.find(GOOGLE_KEY_MARKER)?;
    let rest = &input[start..];
    let len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// True when `key` is exactly one Google API key token.
///
/// Informational only: a key that fails this check is still sent as-is.
pub fn looks_like_google_api_key(key: &str) -> bool {
    let key = key.trim();
    key.starts_with(GOOGLE_KEY_MARKER) && find_google_api_key(key) == Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_returns_full_token() {
        let input = "export GOOGLE_API_KEY=AIzaSyA1b2C3-d4_E5 # dev key";
        assert_eq!(find_google_api_key(input), Some("AIzaSyA1b2C3-d4_E5"));
    }

    #[test]
    fn test_find_key_marker_only() {
        assert_eq!(find_google_api_key("AIzaSy"), Some("AIzaSy"));
    }

    #[test]
    fn test_find_key_absent() {
        assert_eq!(find_google_api_key("sk-live-1234"), None);
        assert_eq!(find_google_api_key(""), None);
    }

    #[test]
    fn test_find_key_stops_at_quote() {
        assert_eq!(
            find_google_api_key(r#"{"key":"AIzaSyXYZ"}"#),
            Some("AIzaSyXYZ")
        );
    }

    #[test]
    fn test_looks_like_key() {
        assert!(looks_like_google_api_key("AIzaSyDUMMYKEY_123-abc"));
        assert!(looks_like_google_api_key("  AIzaSyDUMMY  "));
        assert!(!looks_like_google_api_key("prefix AIzaSyDUMMY"));
        assert!(!looks_like_google_api_key("AIzaSyDUMMY extra"));
        assert!(!looks_like_google_api_key("sk-abc"));
    }
}
