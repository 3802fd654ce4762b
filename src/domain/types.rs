//! # Domain Types
//!
//! Common data structures used across the application logic:
//! Steam accounts, friend relationships and the structured reply (`Embed`).

use std::fmt;
use std::str::FromStr;

/// 64-bit Steam account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SteamId(pub u64);

impl SteamId {
    /// Offset between account numbers and SteamID64 for individual public accounts.
    pub const INDIVIDUAL_BASE: u64 = 76_561_197_960_265_728;

    pub fn from_account_id(account_id: u32) -> Self {
        Self(Self::INDIVIDUAL_BASE + u64::from(account_id))
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SteamId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(SteamId)
    }
}

/// Online state as reported by `GetPlayerSummaries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonaState {
    #[default]
    Offline,
    Online,
    Busy,
    Away,
    Snooze,
    LookingToTrade,
    LookingToPlay,
}

impl PersonaState {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Online,
            2 => Self::Busy,
            3 => Self::Away,
            4 => Self::Snooze,
            5 => Self::LookingToTrade,
            6 => Self::LookingToPlay,
            _ => Self::Offline,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Offline => "⚫",
            Self::Online => "🟢",
            Self::Busy => "🔴",
            Self::Away | Self::Snooze => "🟡",
            Self::LookingToTrade | Self::LookingToPlay => "🔵",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Offline => "Offline",
            Self::Online => "Online",
            Self::Busy => "Busy",
            Self::Away => "Away",
            Self::Snooze => "Snooze",
            Self::LookingToTrade => "Looking to Trade",
            Self::LookingToPlay => "Looking to Play",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

/// Account summary of a single Steam user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Player {
    pub steam_id: SteamId,
    pub name: String,
    pub profile_url: String,
    pub avatar_full: String,
    pub persona_state: PersonaState,
    pub game: Option<String>,
    pub time_created: Option<i64>,
    pub country: Option<String>,
    pub visibility: Visibility,
}

impl Player {
    pub fn is_in_game(&self) -> bool {
        self.game.as_deref().is_some_and(|g| !g.is_empty())
    }

    pub fn status_emoji(&self) -> &'static str {
        if self.is_in_game() {
            "🎮"
        } else {
            self.persona_state.emoji()
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_in_game() {
            "In-Game"
        } else {
            self.persona_state.label()
        }
    }

    /// e.g. `🟢 Online`
    pub fn status(&self) -> String {
        format!("{} {}", self.status_emoji(), self.status_label())
    }
}

/// One entry of a friends list.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub steam_id: SteamId,
    pub friends_since: i64,
}

/// A friend joined with its account summary.
#[derive(Debug, Clone, PartialEq)]
pub struct FriendData {
    pub friend: Friend,
    pub player: Player,
}

/// Structured reply, rendered to chat markup by the application layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Embed {
    pub author: Option<EmbedAuthor>,
    pub thumbnail: Option<String>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedAuthor {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }
}
