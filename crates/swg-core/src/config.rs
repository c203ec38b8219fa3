use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::page::{
    DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, DEFAULT_PREVIEW_PURPOSE, DEFAULT_QUERY_PARAM,
};
use crate::widget_url::{WidgetOptions, DEFAULT_BASE_URL};

/// Global configuration loaded from `~/.config/swg/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwgConfig {
    /// Base URL of the widget service (absolute http/https URL).
    pub service_base_url: String,
    /// Query parameter holding the identifier on the generator page.
    pub query_param: String,
    /// Purpose marker appended to preview image URLs.
    pub preview_purpose: String,
    /// Width of the preview image and of the embeddable snippet.
    pub image_width: u32,
    /// Height of the preview image and of the embeddable snippet.
    pub image_height: u32,
    /// Default display options for `swg url`; the generator always uses the plain template.
    #[serde(default)]
    pub widget: WidgetOptions,
}

impl Default for SwgConfig {
    fn default() -> Self {
        Self {
            service_base_url: DEFAULT_BASE_URL.to_string(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            preview_purpose: DEFAULT_PREVIEW_PURPOSE.to_string(),
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
            widget: WidgetOptions::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("swg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SwgConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SwgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path (no default file is created).
pub fn load_from(path: &Path) -> Result<SwgConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: SwgConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget_url::GameList;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = SwgConfig::default();
        assert_eq!(cfg.service_base_url, "https://steam-widget.com");
        assert_eq!(cfg.query_param, "steamId");
        assert_eq!(cfg.preview_purpose, "generator");
        assert_eq!(cfg.image_width, 350);
        assert_eq!(cfg.image_height, 75);
        assert_eq!(cfg.widget, WidgetOptions::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SwgConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SwgConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.service_base_url, cfg.service_base_url);
        assert_eq!(parsed.query_param, cfg.query_param);
        assert_eq!(parsed.image_width, cfg.image_width);
        assert_eq!(parsed.widget, cfg.widget);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            service_base_url = "http://localhost:8080"
            query_param = "id"
            preview_purpose = "preview"
            image_width = 700
            image_height = 150

            [widget]
            game_list = "TOP_TOTAL_GAMES"
            game_list_size = 3
            playing_right_now = false
        "#;
        let cfg: SwgConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.service_base_url, "http://localhost:8080");
        assert_eq!(cfg.query_param, "id");
        assert_eq!(cfg.image_width, 700);
        assert_eq!(cfg.widget.game_list, Some(GameList::TopTotalGames));
        assert_eq!(cfg.widget.game_list_size, Some(3));
        assert_eq!(cfg.widget.playing_right_now, Some(false));
        assert!(cfg.widget.width.is_none());
    }

    #[test]
    fn widget_section_optional() {
        let toml = r#"
            service_base_url = "https://steam-widget.com"
            query_param = "steamId"
            preview_purpose = "generator"
            image_width = 350
            image_height = 75
        "#;
        let cfg: SwgConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.widget, WidgetOptions::default());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        let toml = toml::to_string_pretty(&SwgConfig::default()).unwrap();
        f.write_all(toml.as_bytes()).unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.query_param, "steamId");
    }

    #[test]
    fn load_from_reports_path_on_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"image_width = \"wide\"").unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
