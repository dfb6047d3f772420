use serde::{Deserialize, Serialize};

/// Identifies the seller behind a listing.
///
/// Sellers are external identities owned by the auth provider (the Firebase
/// uid of the authenticated caller); the marketplace never creates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SellerId(String);

impl SellerId {
    /// Creates a new SellerId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SellerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SellerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SellerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
