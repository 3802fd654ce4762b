//! Wire formats of the `ISteamUser` endpoints.
//!
//! Steam sends 64-bit IDs as strings; they are parsed when converting into domain types.

use serde::Deserialize;

use crate::domain::types::{Friend, PersonaState, Player, SteamId, Visibility};

/// `ResolveVanityURL` and `GetPlayerSummaries` wrap their payload in `response`
#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    pub response: T,
}

#[derive(Debug, Deserialize)]
pub(super) struct VanityResponse {
    pub success: i64,
    #[serde(default)]
    pub steamid: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PlayersResponse {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PlayerSummary {
    pub steamid: String,
    #[serde(default)]
    pub personaname: String,
    #[serde(default)]
    pub profileurl: String,
    #[serde(default)]
    pub avatarfull: String,
    #[serde(default)]
    pub personastate: i64,
    #[serde(default)]
    pub communityvisibilitystate: i64,
    #[serde(default)]
    pub gameextrainfo: Option<String>,
    #[serde(default)]
    pub timecreated: Option<i64>,
    #[serde(default)]
    pub loccountrycode: Option<String>,
}

impl PlayerSummary {
    pub fn into_player(self) -> Option<Player> {
        let steam_id = self.steamid.parse::<SteamId>().ok()?;
        Some(Player {
            steam_id,
            name: self.personaname,
            profile_url: self.profileurl,
            avatar_full: self.avatarfull,
            persona_state: PersonaState::from_code(self.personastate),
            game: self.gameextrainfo,
            time_created: self.timecreated,
            country: self.loccountrycode,
            // 3 is the only "public" value, everything else hides the profile
            visibility: if self.communityvisibilitystate == 3 {
                Visibility::Public
            } else {
                Visibility::Private
            },
        })
    }
}

/// `GetFriendList` uses its own top-level key
#[derive(Debug, Deserialize)]
pub(super) struct FriendListEnvelope {
    pub friendslist: FriendList,
}

#[derive(Debug, Deserialize)]
pub(super) struct FriendList {
    #[serde(default)]
    pub friends: Vec<FriendEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FriendEntry {
    pub steamid: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub friend_since: i64,
}

impl FriendEntry {
    /// Only confirmed friendships; pending invites and blocks are dropped
    pub fn into_friend(self) -> Option<Friend> {
        if !self.relationship.is_empty() && self.relationship != "friend" {
            return None;
        }
        Some(Friend {
            steam_id: self.steamid.parse().ok()?,
            friends_since: self.friend_since,
        })
    }
}
