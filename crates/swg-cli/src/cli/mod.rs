//! CLI for the SWG Steam widget generator.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;
use swg_core::config::{self, SwgConfig};
use swg_core::{GameList, GeneratorSettings, WidgetEndpoint};

use commands::{run_completions, run_generate, run_load, run_man, run_url, UrlArgs};

/// Top-level CLI for the SWG Steam widget generator.
#[derive(Debug, Parser)]
#[command(name = "swg")]
#[command(about = "SWG: build Steam widget links and embeddable snippets", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/swg/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// How page output is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labelled lines plus the resulting address.
    #[default]
    Text,
    /// Container contents as HTML.
    Html,
    /// Address and container as JSON.
    Json,
}

/// Widget service endpoint selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EndpointArg {
    /// PNG image (/widget/img).
    #[default]
    Img,
    /// HTML card (/widget/html).
    Html,
}

impl From<EndpointArg> for WidgetEndpoint {
    fn from(arg: EndpointArg) -> Self {
        match arg {
            EndpointArg::Img => WidgetEndpoint::Img,
            EndpointArg::Html => WidgetEndpoint::Html,
        }
    }
}

/// Game list selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameListArg {
    /// No game list.
    None,
    /// Most played in the last two weeks.
    TopRecent,
    /// Most played overall.
    TopTotal,
    /// Recently played.
    Recent,
}

impl From<GameListArg> for GameList {
    fn from(arg: GameListArg) -> Self {
        match arg {
            GameListArg::None => GameList::None,
            GameListArg::TopRecent => GameList::TopRecentGames,
            GameListArg::TopTotal => GameList::TopTotalGames,
            GameListArg::Recent => GameList::RecentGames,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate the widget for a Steam ID, as the Generate button would.
    Generate {
        /// Steam ID 64, vanity name or profile URL.
        steam_id: String,
        /// Query string of the page before generating (e.g. "?lang=de").
        #[arg(long, default_value = "", value_name = "QUERY")]
        search: String,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Open the generator page at an address and auto-generate from its steamId parameter.
    Load {
        /// Full page URL or bare query string (e.g. "?steamId=76561197960287930").
        address: String,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print a single widget URL with optional display parameters.
    Url {
        /// Steam ID 64, vanity name or profile URL.
        steam_id: String,
        #[arg(long, value_enum, default_value_t)]
        endpoint: EndpointArg,
        /// Which games to list.
        #[arg(long, value_enum)]
        game_list: Option<GameListArg>,
        /// Number of games to list (at most 10; needs a game list).
        #[arg(long, value_name = "N")]
        games: Option<u8>,
        /// Hide the game currently being played.
        #[arg(long)]
        no_playing: bool,
        /// Scale the image to this width in pixels.
        #[arg(long, value_name = "PX")]
        width: Option<u32>,
        /// Purpose marker for the service's hit statistics.
        #[arg(long)]
        purpose: Option<String>,
        /// Also print how the service will resolve the identifier.
        #[arg(long)]
        explain: bool,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

fn load_config(path: Option<&PathBuf>) -> Result<SwgConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let settings =
            GeneratorSettings::from_config(&cfg).context("invalid generator configuration")?;

        match cli.command {
            CliCommand::Generate {
                steam_id,
                search,
                format,
            } => run_generate(settings, &steam_id, &search, format)?,
            CliCommand::Load { address, format } => run_load(settings, &address, format)?,
            CliCommand::Url {
                steam_id,
                endpoint,
                game_list,
                games,
                no_playing,
                width,
                purpose,
                explain,
            } => {
                let args = UrlArgs {
                    steam_id,
                    endpoint: endpoint.into(),
                    game_list: game_list.map(GameList::from),
                    games,
                    no_playing,
                    width,
                    purpose,
                    explain,
                };
                run_url(&cfg, &settings, &args)?
            }
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
