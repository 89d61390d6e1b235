//! Organization lookup by MAC address prefix.

use std::collections::HashMap;

use crate::core::registry::Snapshot;

/// Index of organization names keyed by upper-case OUI
#[derive(Debug, Clone, Default)]
pub struct OuiLookup {
    names: HashMap<String, String>,
}

impl OuiLookup {
    #[must_use]
    pub fn new(snapshot: &Snapshot) -> Self {
        let names = snapshot
            .iter()
            .map(|entry| (entry.identifier.as_str().to_ascii_uppercase(), entry.name.clone()))
            .collect();
        Self { names }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up the organization owning an address.
    ///
    /// Accepts a bare OUI (`00CDFE`, `3c5ab4`), colon or hyphen separated
    /// octets (`48:50:73`, `F0-D2-F1`), or a full 48-bit address. Anything
    /// after the third octet is ignored.
    #[must_use]
    pub fn name_for(&self, address: &str) -> Option<&str> {
        let key = normalize_address(address)?;
        self.names.get(&key).map(String::as_str)
    }

    /// Look up using the first three bytes of a raw address
    #[must_use]
    pub fn name_for_bytes(&self, address: &[u8]) -> Option<&str> {
        let [a, b, c, ..] = address else {
            return None;
        };
        let key = format!("{a:02X}{b:02X}{c:02X}");
        self.names.get(&key).map(String::as_str)
    }
}

/// Reduce an address string to its upper-case 6-digit OUI.
///
/// Returns `None` when the string does not start with three hex octets.
#[must_use]
pub fn normalize_address(address: &str) -> Option<String> {
    let bytes = address.as_bytes();
    let mut key = String::with_capacity(6);
    let mut pos = 0;

    for octet in 0..3 {
        // One optional separator between octets
        if octet > 0 && matches!(bytes.get(pos), Some(b':' | b'-')) {
            pos += 1;
        }

        let pair = bytes.get(pos..pos + 2)?;
        if !pair.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }
        key.extend(pair.iter().map(|b| char::from(b.to_ascii_uppercase())));
        pos += 2;
    }

    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Registry;

    fn sample_lookup() -> OuiLookup {
        let mut registry = Registry::new();
        registry.put("00CDFE", "Apple, Inc.");
        registry.put("3C5AB4", "Google, Inc.");
        registry.put("485073", "Microsoft Corporation");
        registry.put("4857DD", "Facebook Inc");
        registry.put("F0D2F1", "Amazon Technologies Inc.");
        registry.put("0010E0", "Oracle Corporation");
        registry.put("000347", "Intel Corporation");
        registry.put("000B38", "Knürr GmbH");
        registry.put("001EFC", "JSC \"MASSA-K\"");
        registry.put("0004ac", "IBM Corp");
        OuiLookup::new(&registry.into_snapshot())
    }

    #[test]
    fn test_name_for_address_forms() {
        let lookup = sample_lookup();
        assert_eq!(lookup.name_for("00CDFE"), Some("Apple, Inc."));
        assert_eq!(lookup.name_for("3c5ab4"), Some("Google, Inc."));
        assert_eq!(lookup.name_for("48:50:73"), Some("Microsoft Corporation"));
        assert_eq!(lookup.name_for("48:57:dd:01:02:03"), Some("Facebook Inc"));
        assert_eq!(lookup.name_for("F0-D2-F1"), Some("Amazon Technologies Inc."));
        assert_eq!(lookup.name_for("0010e0#XYZ"), Some("Oracle Corporation"));
        assert_eq!(lookup.name_for("00:03-47@XYZ"), Some("Intel Corporation"));
        assert_eq!(lookup.name_for("000B38"), Some("Knürr GmbH"));
        assert_eq!(lookup.name_for("001EFC"), Some("JSC \"MASSA-K\""));
    }

    #[test]
    fn test_name_for_invalid_or_unknown() {
        let lookup = sample_lookup();
        assert_eq!(lookup.name_for(""), None);
        assert_eq!(lookup.name_for("00CD"), None);
        assert_eq!(lookup.name_for("00::CD:FE"), None);
        assert_eq!(lookup.name_for("ZZCDFE"), None);
        assert_eq!(lookup.name_for("FFFFFF"), None);
    }

    #[test]
    fn test_name_for_bytes() {
        let lookup = sample_lookup();
        assert_eq!(lookup.name_for_bytes(&[0x00, 0x04, 0xAC]), Some("IBM Corp"));
        assert_eq!(
            lookup.name_for_bytes(&[0x00, 0xCD, 0xFE, 0x01, 0x02, 0x03]),
            Some("Apple, Inc.")
        );
        assert_eq!(lookup.name_for_bytes(&[0x00, 0x04]), None);
        assert_eq!(lookup.len(), 10);
    }

    #[test]
    fn test_normalize_address() {
        assert_eq!(normalize_address("aa-bb-cc"), Some("AABBCC".to_string()));
        assert_eq!(normalize_address("aabb:cc"), Some("AABBCC".to_string()));
        assert_eq!(normalize_address(":aabbcc"), None);
        assert_eq!(normalize_address("ü0aabb"), None);
    }
}
