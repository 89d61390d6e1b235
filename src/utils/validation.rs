//! Centralized validation and helper functions.

use crate::core::types::IDENTIFIER_LEN;

/// Validate that a string is a 24-bit OUI (6 hex characters, either case).
///
/// # Examples
///
/// ```
/// use oui_props::utils::validation::is_valid_oui;
///
/// assert!(is_valid_oui("00CDFE"));
/// assert!(is_valid_oui("3c5ab4"));
/// assert!(!is_valid_oui("00:CD:FE"));
/// assert!(!is_valid_oui("00CDF")); // 5 chars
/// ```
#[must_use]
pub fn is_valid_oui(s: &str) -> bool {
    s.len() == IDENTIFIER_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Trim ASCII whitespace (including vertical tab) and NUL from both ends.
///
/// Non-ASCII spaces such as U+00A0 are part of the name and are kept.
#[must_use]
pub fn trim_name(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\u{0B}' || c == '\0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_oui() {
        assert!(is_valid_oui("AABBCC"));
        assert!(is_valid_oui("aabbcc")); // lowercase ok
        assert!(!is_valid_oui("AABBC")); // 5 chars
        assert!(!is_valid_oui("AABBCCD")); // 7 chars
        assert!(!is_valid_oui("")); // empty
        assert!(!is_valid_oui("AABBCG")); // invalid char
        assert!(!is_valid_oui("ÄBBCC")); // 6 bytes, not hex
    }

    #[test]
    fn test_trim_name_ascii_only() {
        assert_eq!(trim_name("  Plain Co \t\r\n"), "Plain Co");
        assert_eq!(trim_name("\u{0B}\u{0C}Plain Co\u{0B}"), "Plain Co");
        assert_eq!(trim_name("Foo\0"), "Foo");
        assert_eq!(trim_name("\0 Foo \0\0"), "Foo");
        // Non-ASCII whitespace is kept
        assert_eq!(trim_name("Foo\u{00A0}"), "Foo\u{00A0}");
        assert_eq!(trim_name("\u{3000}Foo\u{2003}"), "\u{3000}Foo\u{2003}");
        assert_eq!(trim_name(" \0 "), "");
    }
}
