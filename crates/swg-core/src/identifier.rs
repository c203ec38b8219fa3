//! Identifier classification.
//!
//! The widget service accepts a numeric 64-bit Steam ID, a vanity name, or a
//! full `steamcommunity.com/id/<vanity>` profile URL. Classification is only
//! used for diagnostics; the identifier is always sent to the service as is.

use serde::Serialize;

const PROFILE_URL_PREFIX: &str = "https://steamcommunity.com/id/";

/// What kind of identifier the user supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdentifierKind {
    /// All ASCII digits; passed to the service unresolved.
    SteamId64,
    /// Profile URL; the service resolves the embedded vanity name.
    ProfileUrl { vanity: String },
    /// Anything else; the service resolves it as a vanity name.
    Vanity,
}

/// Classifies an identifier the way the widget service resolves it.
pub fn classify(id: &str) -> IdentifierKind {
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        return IdentifierKind::SteamId64;
    }
    if id.contains(PROFILE_URL_PREFIX) {
        let vanity = id.replace(PROFILE_URL_PREFIX, "").replace('/', "");
        return IdentifierKind::ProfileUrl { vanity };
    }
    IdentifierKind::Vanity
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::SteamId64 => write!(f, "Steam ID 64"),
            IdentifierKind::ProfileUrl { vanity } => write!(f, "profile URL (vanity {vanity:?})"),
            IdentifierKind::Vanity => write!(f, "vanity name"),
        }
    }
}
