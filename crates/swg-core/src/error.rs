//! Error type for widget URL and page address handling.

use thiserror::Error;

/// Failures while setting up the generator or parsing a page address.
///
/// An empty identifier is not an error: it is rendered as a user-facing
/// message by [`crate::page::WidgetPage::generate`].
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The configured widget service base URL is not a valid absolute URL.
    #[error("invalid widget service base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The widget service base URL uses a scheme other than http/https.
    #[error("unsupported scheme {scheme:?} for widget service base URL (expected http or https)")]
    UnsupportedScheme { scheme: String },

    /// The widget service base URL carries a query or fragment, which the template cannot extend.
    #[error("widget service base URL must not contain a query or fragment: {0}")]
    BaseUrlHasQuery(String),

    /// A page address passed to the loader could not be parsed.
    #[error("invalid page URL {url:?}: {source}")]
    InvalidPageUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
