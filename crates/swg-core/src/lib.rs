pub mod config;
pub mod logging;

pub mod error;
pub mod fragment;
pub mod history;
pub mod identifier;
pub mod page;
pub mod query;
pub mod sanitize;
pub mod widget_url;

pub use error::WidgetError;
pub use fragment::Fragment;
pub use history::{History, MemoryHistory};
pub use page::{GenerateOutcome, GeneratorSettings, WidgetPage};
pub use widget_url::{GameList, WidgetEndpoint, WidgetOptions, WidgetUrl, WidgetUrlTemplate};
