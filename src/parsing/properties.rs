//! Reader for generated `oui.properties` files.
//!
//! Accepts the output of [`crate::output::writer::write_properties`]: comment
//! lines start with `#` or `!`, data lines are `OUI = value`, and non-ASCII
//! text is written as `\uXXXX` escapes (surrogate pairs above U+FFFF).

use std::path::Path;

use crate::core::registry::Registry;
use crate::parsing::csv::ParseError;
use crate::utils::validation::is_valid_oui;

/// Parse a generated properties file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` for lines that are not valid entries.
pub fn parse_properties_file(path: &Path) -> Result<Registry, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_properties_text(&content)
}

/// Parse properties text into a registry
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line lacks `=`, has a key that is
/// not a 6-digit hex OUI, or escapes an unpaired surrogate. A `\u` that is
/// not followed by four hex digits is kept as literal text.
pub fn parse_properties_text(text: &str) -> Result<Registry, ParseError> {
    let mut registry = Registry::new();

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| {
            ParseError::InvalidFormat(format!("Line {line_num} has no '=' separator"))
        })?;

        let key = key.trim();
        if !is_valid_oui(key) {
            return Err(ParseError::InvalidFormat(format!(
                "Invalid OUI on line {line_num}: '{key}'"
            )));
        }

        registry.put(key, decode_value(value.trim(), line_num)?);
    }

    Ok(registry)
}

/// Undo `\uXXXX` escaping, recombining surrogate pairs
fn decode_value(value: &str, line_num: usize) -> Result<String, ParseError> {
    let mut units: Vec<u16> = Vec::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find("\\u") {
        units.extend(rest[..pos].encode_utf16());

        let unit = rest
            .get(pos + 2..pos + 6)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u16::from_str_radix(hex, 16).ok());

        match unit {
            Some(unit) => {
                units.push(unit);
                rest = &rest[pos + 6..];
            }
            // Not an escape: the name itself contains `\u`
            None => {
                units.extend("\\u".encode_utf16());
                rest = &rest[pos + 2..];
            }
        }
    }
    units.extend(rest.encode_utf16());

    String::from_utf16(&units).map_err(|_| {
        ParseError::InvalidFormat(format!("Unpaired surrogate escape on line {line_num}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_properties_text() {
        let text = r"# Generated on: 2016-05-01 12:34:56 UTC
# Entry count:  3
# Data digest:  abc

000B38 = Kn\u00FCrr GmbH
001122 = Plain Co
AABBCC = Example, Inc.
";

        let registry = parse_properties_text(text).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("000B38"), Some("Knürr GmbH"));
        assert_eq!(registry.get("AABBCC"), Some("Example, Inc."));
    }

    #[test]
    fn test_surrogate_pair_recombined() {
        let registry = parse_properties_text(r"001122 = Smile \uD83D\uDE00 Ltd").unwrap();
        assert_eq!(registry.get("001122"), Some("Smile \u{1F600} Ltd"));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let registry = parse_properties_text("001122 = A=B Corp\n! bang comment\n").unwrap();
        assert_eq!(registry.get("001122"), Some("A=B Corp"));
    }

    #[test]
    fn test_invalid_lines() {
        assert!(parse_properties_text("no separator here").is_err());
        assert!(parse_properties_text("XYZ = Foo").is_err());
        assert!(parse_properties_text(r"001122 = Lone \uD83D here").is_err());
    }

    #[test]
    fn test_literal_backslash_u_is_kept() {
        let registry = parse_properties_text(
            r"001122 = C:\users\Foo
334455 = Bad \u12
AABBCC = Kn\u00FCrr \uZZZZ",
        )
        .unwrap();
        assert_eq!(registry.get("001122"), Some(r"C:\users\Foo"));
        assert_eq!(registry.get("334455"), Some(r"Bad \u12"));
        assert_eq!(registry.get("AABBCC"), Some(r"Knürr \uZZZZ"));
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_properties_text("").unwrap().is_empty());
    }
}
