//! Optional display parameters understood by the widget image endpoint.

use serde::{Deserialize, Serialize};

/// Number of games the service lists when `gameListSize` is not given.
pub const DEFAULT_GAME_LIST_SIZE: u8 = 5;
/// The service never lists more games than this.
pub const MAX_GAME_LIST_SIZE: u8 = 10;

/// Which games the widget lists, bound by the service from the constant name
/// (`gameList=TOP_RECENT_GAMES`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameList {
    /// No game list; `gameListSize` has no effect.
    #[default]
    None,
    /// Most played in the last two weeks, by playtime.
    TopRecentGames,
    /// Most played overall, by playtime.
    TopTotalGames,
    /// Recently played, in the order Steam reports them.
    RecentGames,
}

impl GameList {
    /// Query value as the service expects it.
    pub fn as_param(self) -> &'static str {
        match self {
            GameList::None => "NONE",
            GameList::TopRecentGames => "TOP_RECENT_GAMES",
            GameList::TopTotalGames => "TOP_TOTAL_GAMES",
            GameList::RecentGames => "RECENT_GAMES",
        }
    }
}

/// Display options for a widget URL. `None` (or the service default) leaves
/// the parameter out so the URL stays in its shortest form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetOptions {
    /// Which games to list (service default: none).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_list: Option<GameList>,
    /// How many games to list (clamped to [`MAX_GAME_LIST_SIZE`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_list_size: Option<u8>,
    /// Whether to show the game currently being played (service default: true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playing_right_now: Option<bool>,
    /// Width in pixels the service scales the image to (0 = native size).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl WidgetOptions {
    /// Effective `gameList`, if a list was requested.
    pub fn game_list(&self) -> Option<GameList> {
        self.game_list.filter(|&g| g != GameList::None)
    }

    /// Effective `gameListSize`, if it differs from the service default.
    pub fn game_list_size(&self) -> Option<u8> {
        self.game_list_size
            .map(|n| n.min(MAX_GAME_LIST_SIZE))
            .filter(|&n| n != DEFAULT_GAME_LIST_SIZE)
    }

    /// Effective `playingRightNow`, if it differs from the service default.
    pub fn playing_right_now(&self) -> Option<bool> {
        self.playing_right_now.filter(|&p| !p)
    }

    /// Effective `width`, if scaling was requested.
    pub fn width(&self) -> Option<u32> {
        self.width.filter(|&w| w > 0)
    }

    /// Appends the non-default parameters to a URL that already has a query.
    pub(crate) fn append_query(&self, url: &mut String) {
        if let Some(g) = self.game_list() {
            url.push_str(&format!("&gameList={}", g.as_param()));
        }
        if let Some(n) = self.game_list_size() {
            url.push_str(&format!("&gameListSize={n}"));
        }
        if let Some(p) = self.playing_right_now() {
            url.push_str(&format!("&playingRightNow={p}"));
        }
        if let Some(w) = self.width() {
            url.push_str(&format!("&width={w}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(options: &WidgetOptions) -> String {
        let mut s = String::new();
        options.append_query(&mut s);
        s
    }

    #[test]
    fn defaults_add_nothing() {
        assert_eq!(query(&WidgetOptions::default()), "");
        let explicit_defaults = WidgetOptions {
            game_list: Some(GameList::None),
            game_list_size: Some(DEFAULT_GAME_LIST_SIZE),
            playing_right_now: Some(true),
            width: Some(0),
        };
        assert_eq!(query(&explicit_defaults), "");
    }

    #[test]
    fn game_list_size_clamped() {
        let o = WidgetOptions {
            game_list_size: Some(50),
            ..Default::default()
        };
        assert_eq!(o.game_list_size(), Some(MAX_GAME_LIST_SIZE));
        assert_eq!(query(&o), "&gameListSize=10");
    }

    #[test]
    fn fixed_parameter_order() {
        let o = WidgetOptions {
            game_list: Some(GameList::TopRecentGames),
            game_list_size: Some(3),
            playing_right_now: Some(false),
            width: Some(500),
        };
        assert_eq!(
            query(&o),
            "&gameList=TOP_RECENT_GAMES&gameListSize=3&playingRightNow=false&width=500"
        );
    }

    #[test]
    fn game_list_params_match_serde_names() {
        for g in [
            GameList::None,
            GameList::TopRecentGames,
            GameList::TopTotalGames,
            GameList::RecentGames,
        ] {
            let value = toml::Value::try_from(g).unwrap();
            assert_eq!(value.as_str(), Some(g.as_param()));
        }
    }
}
