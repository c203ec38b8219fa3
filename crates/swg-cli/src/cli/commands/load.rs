//! `swg load <address>` – open the generator page at an address.

use anyhow::Result;
use swg_core::{GeneratorSettings, MemoryHistory, WidgetPage};

use super::render_page;
use crate::cli::OutputFormat;

pub fn run_load(settings: GeneratorSettings, address: &str, format: OutputFormat) -> Result<()> {
    let history = MemoryHistory::from_address(address)?;
    let mut page = WidgetPage::new(settings, history);
    if page.load().is_none() {
        let param = &page.settings().query_param;
        tracing::info!("no {param} parameter in {address}");
        if format == OutputFormat::Text {
            println!("No {param} parameter in {address}; nothing generated.");
            return Ok(());
        }
    }
    println!("{}", render_page(&page, format)?);
    Ok(())
}
