//! Contents of the widget container.
//!
//! A [`Fragment`] is rebuilt from scratch on every generation call; there is
//! no incremental update. Text blocks hold plain text (the equivalent of DOM
//! `textContent`), so serializing them with [`Fragment::to_html`] escapes
//! whatever they contain.

use serde::Serialize;
use std::fmt::Write as _;

/// Message shown when the generator is asked to run without an identifier.
pub const EMPTY_IDENTIFIER_MESSAGE: &str = "Please enter a valid Steam ID.";

pub const PREVIEW_LABEL: &str = "Preview:";
pub const LINK_LABEL: &str = "Link:";
pub const CODE_LABEL: &str = "HTML Code:";

/// Everything the container shows after a generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    /// Single paragraph with a user-facing message.
    Error { message: String },
    /// Preview, link and code blocks, in that order.
    Widget(WidgetBlocks),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetBlocks {
    pub preview: PreviewBlock,
    pub link: TextBlock,
    pub code: TextBlock,
}

/// Labelled preview image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewBlock {
    pub label: String,
    pub src: String,
    pub width: u32,
    pub height: u32,
}

/// Labelled box holding plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub label: String,
    /// CSS class of the box (`link-box` or `code-box`).
    pub class: String,
    pub text: String,
}

impl Fragment {
    pub fn empty_identifier() -> Self {
        Fragment::Error {
            message: EMPTY_IDENTIFIER_MESSAGE.to_string(),
        }
    }

    /// Builds the three widget blocks for a widget URL.
    ///
    /// `preview_src` is the URL the preview image loads (normally the widget
    /// URL with a purpose marker); the link and snippet show `widget_url`.
    pub fn widget(widget_url: &str, preview_src: String, width: u32, height: u32) -> Self {
        Fragment::Widget(WidgetBlocks {
            preview: PreviewBlock {
                label: PREVIEW_LABEL.to_string(),
                src: preview_src,
                width,
                height,
            },
            link: TextBlock {
                label: LINK_LABEL.to_string(),
                class: "link-box".to_string(),
                text: widget_url.to_string(),
            },
            code: TextBlock {
                label: CODE_LABEL.to_string(),
                class: "code-box".to_string(),
                text: format!(
                    "<img src=\"{widget_url}\" width=\"{width}\" height=\"{height}\">"
                ),
            },
        })
    }

    /// Serializes the container contents as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        match self {
            Fragment::Error { message } => {
                let _ = write!(out, "<p>{}</p>", escape_text(message));
            }
            Fragment::Widget(blocks) => {
                let p = &blocks.preview;
                push_label(&mut out, &p.label);
                let _ = write!(
                    out,
                    "<div class=\"code-box\"><img src=\"{}\" width=\"{}\" height=\"{}\"></div>",
                    escape_attr(&p.src),
                    p.width,
                    p.height
                );
                for block in [&blocks.link, &blocks.code] {
                    push_label(&mut out, &block.label);
                    let _ = write!(
                        out,
                        "<div class=\"{}\">{}</div>",
                        escape_attr(&block.class),
                        escape_text(&block.text)
                    );
                }
            }
        }
        out
    }

    /// Renders label/value lines for a terminal.
    pub fn to_text(&self) -> String {
        match self {
            Fragment::Error { message } => message.clone(),
            Fragment::Widget(blocks) => format!(
                "{}\n  {} ({}x{})\n{}\n  {}\n{}\n  {}",
                blocks.preview.label,
                blocks.preview.src,
                blocks.preview.width,
                blocks.preview.height,
                blocks.link.label,
                blocks.link.text,
                blocks.code.label,
                blocks.code.text
            ),
        }
    }
}

fn push_label(out: &mut String, label: &str) {
    let _ = write!(out, "<div class=\"label\">{}</div>", escape_text(label));
}

/// Text-node serialization: `&`, `<`, `>`.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Double-quoted attribute serialization: `&`, `"`.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}
