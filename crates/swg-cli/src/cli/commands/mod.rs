//! CLI command handlers. Each command is in its own file.

mod completions;
mod generate;
mod load;
mod render;
mod url;

pub use completions::{run_completions, run_man};
pub use generate::run_generate;
pub use load::run_load;
pub(crate) use render::render_page;
pub use url::{run_url, UrlArgs};
#[cfg(test)]
pub(crate) use url::widget_url_report;
