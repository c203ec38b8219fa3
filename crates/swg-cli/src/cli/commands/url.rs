//! `swg url <steam-id>` – print a single widget URL.

use anyhow::{bail, Result};
use swg_core::config::SwgConfig;
use swg_core::fragment::EMPTY_IDENTIFIER_MESSAGE;
use swg_core::identifier::classify;
use swg_core::sanitize::sanitize_identifier;
use swg_core::{GameList, GeneratorSettings, WidgetEndpoint};

#[derive(Debug, Clone)]
pub struct UrlArgs {
    pub steam_id: String,
    pub endpoint: WidgetEndpoint,
    pub game_list: Option<GameList>,
    pub games: Option<u8>,
    pub no_playing: bool,
    pub width: Option<u32>,
    pub purpose: Option<String>,
    pub explain: bool,
}

/// Builds the lines `swg url` prints. Flags override the `[widget]` config defaults.
pub(crate) fn widget_url_report(
    cfg: &SwgConfig,
    settings: &GeneratorSettings,
    args: &UrlArgs,
) -> Result<Vec<String>> {
    let Some(id) = sanitize_identifier(&args.steam_id) else {
        bail!(EMPTY_IDENTIFIER_MESSAGE);
    };

    let mut options = cfg.widget.clone();
    if args.game_list.is_some() {
        options.game_list = args.game_list;
    }
    if args.games.is_some() {
        options.game_list_size = args.games;
    }
    if args.no_playing {
        options.playing_right_now = Some(false);
    }
    if args.width.is_some() {
        options.width = args.width;
    }

    if options.game_list_size.is_some() && options.game_list().is_none() {
        tracing::warn!("game list size given without a game list; the service ignores it");
    }

    let url = settings.template.build(args.endpoint, &id, &options);
    let mut lines = vec![match &args.purpose {
        Some(purpose) => url.with_purpose(purpose),
        None => url.to_string(),
    }];
    if args.explain {
        lines.push(format!("identifier: {id} ({})", classify(&id)));
    }
    Ok(lines)
}

pub fn run_url(cfg: &SwgConfig, settings: &GeneratorSettings, args: &UrlArgs) -> Result<()> {
    for line in widget_url_report(cfg, settings, args)? {
        println!("{line}");
    }
    Ok(())
}
