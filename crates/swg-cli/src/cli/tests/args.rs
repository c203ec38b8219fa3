//! Parse tests for every subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand, EndpointArg, GameListArg, OutputFormat};
use clap::Parser;

#[test]
fn cli_parse_generate() {
    match parse(&["swg", "generate", "76561197960287930"]) {
        CliCommand::Generate {
            steam_id,
            search,
            format,
        } => {
            assert_eq!(steam_id, "76561197960287930");
            assert_eq!(search, "");
            assert_eq!(format, OutputFormat::Text);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_with_search_and_format() {
    match parse(&[
        "swg",
        "generate",
        "gaben",
        "--search",
        "?lang=de",
        "--format",
        "json",
    ]) {
        CliCommand::Generate {
            steam_id,
            search,
            format,
        } => {
            assert_eq!(steam_id, "gaben");
            assert_eq!(search, "?lang=de");
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("expected Generate with options"),
    }
}

#[test]
fn cli_parse_generate_empty_id() {
    match parse(&["swg", "generate", ""]) {
        CliCommand::Generate { steam_id, .. } => assert_eq!(steam_id, ""),
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_load() {
    match parse(&[
        "swg",
        "load",
        "https://steam-widget.com/?steamId=1",
        "--format",
        "html",
    ]) {
        CliCommand::Load { address, format } => {
            assert_eq!(address, "https://steam-widget.com/?steamId=1");
            assert_eq!(format, OutputFormat::Html);
        }
        _ => panic!("expected Load"),
    }
}

#[test]
fn cli_parse_url_defaults() {
    match parse(&["swg", "url", "gaben"]) {
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
            assert_eq!(steam_id, "gaben");
            assert_eq!(endpoint, EndpointArg::Img);
            assert!(game_list.is_none());
            assert!(games.is_none());
            assert!(!no_playing);
            assert!(width.is_none());
            assert!(purpose.is_none());
            assert!(!explain);
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_url_options() {
    match parse(&[
        "swg",
        "url",
        "gaben",
        "--endpoint",
        "html",
        "--game-list",
        "top-recent",
        "--games",
        "7",
        "--no-playing",
        "--width",
        "500",
        "--purpose",
        "forum",
        "--explain",
    ]) {
        CliCommand::Url {
            endpoint,
            game_list,
            games,
            no_playing,
            width,
            purpose,
            explain,
            ..
        } => {
            assert_eq!(endpoint, EndpointArg::Html);
            assert_eq!(game_list, Some(GameListArg::TopRecent));
            assert_eq!(games, Some(7));
            assert!(no_playing);
            assert_eq!(width, Some(500));
            assert_eq!(purpose.as_deref(), Some("forum"));
            assert!(explain);
        }
        _ => panic!("expected Url with options"),
    }
}

#[test]
fn cli_parse_completions_and_man() {
    match parse(&["swg", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
    assert!(matches!(parse(&["swg", "man"]), CliCommand::Man));
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["swg", "generate", "x", "--config", "/tmp/swg.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/swg.toml"))
    );
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["swg", "generate", "x", "--format", "xml"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
