/// Record-type tag that marks MA-L (MAC Address Block Large) rows in the IEEE CSV
pub const RECORD_TAG: &str = "MA-L";

/// Number of hex digits in an OUI
pub const IDENTIFIER_LEN: usize = 6;

/// A 24-bit organizationally unique identifier, kept exactly as it appeared in the input
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One identifier -> organization name association
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub identifier: Identifier,
    pub name: String,
}

impl RegistryEntry {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: Identifier::new(identifier),
            name: name.into(),
        }
    }
}
