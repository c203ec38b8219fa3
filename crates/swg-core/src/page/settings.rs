//! Fixed parameters of the generator page.

use crate::config::SwgConfig;
use crate::error::WidgetError;
use crate::widget_url::WidgetUrlTemplate;

/// Query parameter (and input field id) holding the identifier.
pub const DEFAULT_QUERY_PARAM: &str = "steamId";
/// Purpose marker appended to the preview image URL.
pub const DEFAULT_PREVIEW_PURPOSE: &str = "generator";
pub const DEFAULT_IMAGE_WIDTH: u32 = 350;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 75;

/// Everything the generator needs besides the page state itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub template: WidgetUrlTemplate,
    pub query_param: String,
    pub preview_purpose: String,
    pub image_width: u32,
    pub image_height: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            template: WidgetUrlTemplate::default(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            preview_purpose: DEFAULT_PREVIEW_PURPOSE.to_string(),
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
        }
    }
}

impl GeneratorSettings {
    /// Builds settings from the loaded config, validating the service base URL.
    pub fn from_config(cfg: &SwgConfig) -> Result<Self, WidgetError> {
        Ok(Self {
            template: WidgetUrlTemplate::new(&cfg.service_base_url)?,
            query_param: cfg.query_param.clone(),
            preview_purpose: cfg.preview_purpose.clone(),
            image_width: cfg.image_width,
            image_height: cfg.image_height,
        })
    }
}
