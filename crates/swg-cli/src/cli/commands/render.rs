//! Shared page output for `generate` and `load`.

use anyhow::Result;
use serde::Serialize;
use swg_core::{Fragment, MemoryHistory, WidgetPage};

use crate::cli::OutputFormat;

#[derive(Serialize)]
struct PageReport<'a> {
    location: String,
    input: &'a str,
    container: Option<&'a Fragment>,
}

/// Renders the page's container and address bar in the requested format.
pub(crate) fn render_page(page: &WidgetPage<MemoryHistory>, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Text => {
            let location = page.history().location();
            match page.container() {
                Some(fragment) => format!("{}\n\nAddress: {}", fragment.to_text(), location),
                None => format!("Address: {location}"),
            }
        }
        OutputFormat::Html => page.container().map(Fragment::to_html).unwrap_or_default(),
        OutputFormat::Json => serde_json::to_string_pretty(&PageReport {
            location: page.history().location(),
            input: page.input(),
            container: page.container(),
        })?,
    };
    Ok(out)
}
