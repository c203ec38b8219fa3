//! `swg generate <steam-id>` – generate the widget from a typed identifier.

use anyhow::Result;
use swg_core::{GenerateOutcome, GeneratorSettings, MemoryHistory, WidgetPage};

use super::render_page;
use crate::cli::OutputFormat;

pub fn run_generate(
    settings: GeneratorSettings,
    steam_id: &str,
    search: &str,
    format: OutputFormat,
) -> Result<()> {
    let mut page = WidgetPage::new(settings, MemoryHistory::with_search(search));
    page.set_input(steam_id);
    if let GenerateOutcome::Generated { kind, .. } = page.generate() {
        tracing::info!(%kind, "generated widget");
    }
    println!("{}", render_page(&page, format)?);
    Ok(())
}
