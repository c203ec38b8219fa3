//! Widget URL construction.
//!
//! Every widget URL follows the fixed template
//! `<base>/widget/img?id=<percent-encoded identifier>`, optionally followed by
//! the service's display options and a `purpose` marker.

mod options;

pub use options::{GameList, WidgetOptions, DEFAULT_GAME_LIST_SIZE, MAX_GAME_LIST_SIZE};

use crate::error::WidgetError;
use crate::sanitize::encode_uri_component;
use serde::Serialize;
use std::fmt;
use url::Url;

/// Base URL of the public widget service.
pub const DEFAULT_BASE_URL: &str = "https://steam-widget.com";

/// Widget service endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetEndpoint {
    /// PNG image (`/widget/img`).
    #[default]
    Img,
    /// HTML card (`/widget/html`).
    Html,
}

impl WidgetEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            WidgetEndpoint::Img => "/widget/img",
            WidgetEndpoint::Html => "/widget/html",
        }
    }
}

/// Validated widget service base URL from which widget URLs are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetUrlTemplate {
    /// Normalized base without trailing slash, e.g. `https://steam-widget.com`.
    base: String,
}

impl Default for WidgetUrlTemplate {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl WidgetUrlTemplate {
    /// Validates `base_url` (absolute http/https URL, no query or fragment).
    /// A path prefix is kept, so `https://host/steam` yields `https://host/steam/widget/img?...`.
    pub fn new(base_url: &str) -> Result<Self, WidgetError> {
        let parsed = Url::parse(base_url).map_err(|source| WidgetError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(WidgetError::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(WidgetError::BaseUrlHasQuery(base_url.to_string()));
        }
        Ok(Self {
            base: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Builds the image URL for an already sanitized identifier with default options.
    pub fn image(&self, id: &str) -> WidgetUrl {
        self.build(WidgetEndpoint::Img, id, &WidgetOptions::default())
    }

    /// Builds a widget URL. `id` is expected to be sanitized (see
    /// [`crate::sanitize::sanitize_identifier`]); it is percent-encoded here.
    pub fn build(&self, endpoint: WidgetEndpoint, id: &str, options: &WidgetOptions) -> WidgetUrl {
        let mut url = format!(
            "{}{}?id={}",
            self.base,
            endpoint.path(),
            encode_uri_component(id)
        );
        options.append_query(&mut url);
        WidgetUrl(url)
    }
}

/// A fully built widget URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WidgetUrl(String);

impl WidgetUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The URL with a `purpose` marker appended, used by the service to
    /// attribute hits (e.g. `generator` for the preview image).
    pub fn with_purpose(&self, purpose: &str) -> String {
        format!("{}&purpose={}", self.0, encode_uri_component(purpose))
    }
}

impl fmt::Display for WidgetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template() {
        let url = WidgetUrlTemplate::default().image("76561197960287930");
        assert_eq!(
            url.as_str(),
            "https://steam-widget.com/widget/img?id=76561197960287930"
        );
    }

    #[test]
    fn identifier_is_percent_encoded() {
        let url = WidgetUrlTemplate::default().image("a b&lt;");
        assert_eq!(
            url.as_str(),
            "https://steam-widget.com/widget/img?id=a%20b%26lt%3B"
        );
    }

    #[test]
    fn purpose_appended_last() {
        let url = WidgetUrlTemplate::default().image("gaben");
        assert_eq!(
            url.with_purpose("generator"),
            "https://steam-widget.com/widget/img?id=gaben&purpose=generator"
        );
        assert_eq!(
            url.with_purpose("my site"),
            "https://steam-widget.com/widget/img?id=gaben&purpose=my%20site"
        );
    }

    #[test]
    fn custom_base_normalized() {
        let t = WidgetUrlTemplate::new("http://localhost:8080/").unwrap();
        assert_eq!(t.base(), "http://localhost:8080");
        let t = WidgetUrlTemplate::new("https://example.com/steam/").unwrap();
        assert_eq!(
            t.image("x").as_str(),
            "https://example.com/steam/widget/img?id=x"
        );
    }

    #[test]
    fn html_endpoint() {
        let url = WidgetUrlTemplate::default().build(
            WidgetEndpoint::Html,
            "gaben",
            &WidgetOptions::default(),
        );
        assert_eq!(url.as_str(), "https://steam-widget.com/widget/html?id=gaben");
    }

    #[test]
    fn rejects_bad_bases() {
        assert!(matches!(
            WidgetUrlTemplate::new("steam-widget.com"),
            Err(WidgetError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            WidgetUrlTemplate::new("ftp://steam-widget.com"),
            Err(WidgetError::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            WidgetUrlTemplate::new("https://steam-widget.com/?x=1"),
            Err(WidgetError::BaseUrlHasQuery(_))
        ));
    }
}
