//! The widget generator page.
//!
//! [`WidgetPage`] owns the state a browser page would keep in its DOM: the
//! identifier input, the widget container and the address bar. Loading reads
//! the identifier from the query string; generating rebuilds the container
//! and rewrites the query string in place.

mod settings;

pub use settings::{
    GeneratorSettings, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, DEFAULT_PREVIEW_PURPOSE,
    DEFAULT_QUERY_PARAM,
};

use crate::fragment::Fragment;
use crate::history::{History, MemoryHistory};
use crate::identifier::{classify, IdentifierKind};
use crate::query::QueryString;
use crate::sanitize::{escape_html, sanitize_identifier};
use crate::widget_url::WidgetUrl;

/// What a generation call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The input was blank; the container shows the error message.
    EmptyIdentifier,
    /// The container shows the preview, link and code blocks.
    Generated {
        /// Sanitized identifier, as stored in the query string.
        identifier: String,
        kind: IdentifierKind,
        widget_url: WidgetUrl,
    },
}

#[derive(Debug, Clone)]
pub struct WidgetPage<H = MemoryHistory> {
    settings: GeneratorSettings,
    history: H,
    input: String,
    container: Option<Fragment>,
}

impl<H: History> WidgetPage<H> {
    /// A freshly opened page: empty input, empty container.
    pub fn new(settings: GeneratorSettings, history: H) -> Self {
        Self {
            settings,
            history,
            input: String::new(),
            container: None,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Sets the input field, as a user typing into it would.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Current container contents; `None` until the first generation call.
    pub fn container(&self) -> Option<&Fragment> {
        self.container.as_ref()
    }

    /// Page-load hook.
    ///
    /// If the query string carries a non-empty identifier parameter, its
    /// decoded value is HTML-escaped into the input field and the widget is
    /// generated. Otherwise nothing happens and `None` is returned.
    pub fn load(&mut self) -> Option<GenerateOutcome> {
        let query = QueryString::parse(self.history.search());
        let value = query
            .get(&self.settings.query_param)
            .filter(|v| !v.is_empty())?;
        self.input = escape_html(value);
        tracing::info!(param = %self.settings.query_param, "identifier found in query string, generating");
        Some(self.generate())
    }

    /// Generates the widget from the current input value.
    ///
    /// A blank input replaces the container with the error message and drops
    /// the identifier parameter from the query string. Otherwise the escaped
    /// identifier is written to the query string and the container is
    /// replaced with the preview, link and code blocks.
    ///
    /// Unlike the browser page, surrounding whitespace is trimmed before the
    /// emptiness check and the trimmed value is the one used.
    pub fn generate(&mut self) -> GenerateOutcome {
        let param = self.settings.query_param.as_str();
        let mut query = QueryString::parse(self.history.search());

        let Some(identifier) = sanitize_identifier(&self.input) else {
            tracing::debug!("empty identifier, showing error message");
            self.container = Some(Fragment::empty_identifier());
            if query.delete(param) {
                self.history.replace_state(query.to_search());
            }
            return GenerateOutcome::EmptyIdentifier;
        };

        query.set(param, &identifier);
        self.history.replace_state(query.to_search());

        let widget_url = self.settings.template.image(&identifier);
        let preview_src = widget_url.with_purpose(&self.settings.preview_purpose);
        self.container = Some(Fragment::widget(
            widget_url.as_str(),
            preview_src,
            self.settings.image_width,
            self.settings.image_height,
        ));

        let kind = classify(&identifier);
        tracing::debug!(%kind, url = %widget_url, "widget generated");
        GenerateOutcome::Generated {
            identifier,
            kind,
            widget_url,
        }
    }
}
