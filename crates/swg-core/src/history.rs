//! Address-bar state of the generator page.

use crate::error::WidgetError;
use url::Url;

/// The page's address bar, as far as the generator is concerned.
///
/// Only a same-document `replace_state` is offered: the generator can rewrite
/// the query string but has no way to navigate or reload.
pub trait History {
    /// Current search string (`?a=b`), or empty.
    fn search(&self) -> &str;

    /// Replaces the current entry's search string in place.
    fn replace_state(&mut self, search: String);
}

/// In-memory address bar. Keeps every replaced search string for inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHistory {
    path: String,
    search: String,
    replaced: Vec<String>,
}

impl MemoryHistory {
    /// Page at `/` with the given search string (`?` optional).
    pub fn with_search(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        let search = if raw.is_empty() {
            String::new()
        } else {
            format!("?{raw}")
        };
        Self {
            path: "/".to_string(),
            search,
            replaced: Vec::new(),
        }
    }

    /// Accepts a full page URL (`https://steam-widget.com/?steamId=x`) or a
    /// bare search string (`?steamId=x`, `steamId=x`). Only a scheme ahead
    /// of any query syntax makes it a URL; query values may themselves be URLs.
    pub fn from_address(address: &str) -> Result<Self, WidgetError> {
        let head = address
            .split(['?', '=', '&'])
            .next()
            .unwrap_or("");
        if !head.contains("://") {
            return Ok(Self::with_search(address));
        }
        let url = Url::parse(address).map_err(|source| WidgetError::InvalidPageUrl {
            url: address.to_string(),
            source,
        })?;
        let mut history = Self::with_search(url.query().unwrap_or(""));
        history.path = url.path().to_string();
        Ok(history)
    }

    /// Path plus search, as shown after the host in the address bar.
    pub fn location(&self) -> String {
        format!("{}{}", self.path, self.search)
    }

    /// Every search string passed to `replace_state`, oldest first.
    pub fn replaced(&self) -> &[String] {
        &self.replaced
    }
}

impl History for MemoryHistory {
    fn search(&self) -> &str {
        &self.search
    }

    fn replace_state(&mut self, search: String) {
        tracing::trace!(from = %self.search, to = %search, "history.replaceState");
        self.replaced.push(search.clone());
        self.search = search;
    }
}
