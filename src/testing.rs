//! In-memory fakes for the chat and Steam seams, shared by handler and router tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::traits::{ChatProvider, SteamProvider};
use crate::domain::types::{Friend, PersonaState, Player, SteamId};
use crate::domain::error::{Error as SteamError, ErrorKind};

#[derive(Default)]
pub struct FakeChat {
    pub messages: Mutex<Vec<String>>,
    pub notifications: Mutex<Vec<String>>,
}

impl FakeChat {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for FakeChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        let mut messages = self.messages.lock().unwrap();
        messages.push(content.to_string());
        Ok(format!("$event{}", messages.len()))
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        self.notifications.lock().unwrap().push(content.to_string());
        Ok(())
    }

    async fn typing(&self, _active: bool) -> Result<(), String> {
        Ok(())
    }

    fn room_id(&self) -> String {
        "!room:example.org".to_string()
    }
}

/// Steam stand-in backed by maps. Unknown identifiers fail to resolve.
#[derive(Default)]
pub struct FakeSteam {
    pub ids: HashMap<String, SteamId>,
    pub players: HashMap<SteamId, Player>,
    pub friends: HashMap<SteamId, Vec<Friend>>,
    /// Friend list requests answer 401, like a private profile
    pub private_friends: bool,
    /// Every summaries call after the first one fails
    pub fail_secondary_summaries: bool,
    pub summary_calls: Mutex<Vec<Vec<SteamId>>>,
}

impl FakeSteam {
    pub fn with_player(mut self, input: &str, player: Player) -> Self {
        self.ids.insert(input.to_string(), player.steam_id);
        self.players.insert(player.steam_id, player);
        self
    }

    pub fn with_friends(mut self, owner: SteamId, friends: Vec<(Friend, Player)>) -> Self {
        let list = friends
            .into_iter()
            .map(|(friend, player)| {
                self.players.insert(player.steam_id, player);
                friend
            })
            .collect();
        self.friends.insert(owner, list);
        self
    }

    pub fn summary_calls(&self) -> Vec<Vec<SteamId>> {
        self.summary_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SteamProvider for FakeSteam {
    async fn resolve_steam_id(&self, input: &str) -> Result<SteamId, SteamError> {
        self.ids.get(input.trim()).copied().ok_or_else(|| {
            SteamError::new("ResolveVanityURL", ErrorKind::NotFound, format!("{}: No match", input))
        })
    }

    async fn player_summaries(&self, ids: &[SteamId]) -> Result<Vec<Player>, SteamError> {
        let call_index = {
            let mut calls = self.summary_calls.lock().unwrap();
            calls.push(ids.to_vec());
            calls.len()
        };
        if self.fail_secondary_summaries && call_index > 1 {
            return Err(SteamError::new("GetPlayerSummaries", ErrorKind::Http(500), "HTTP 500"));
        }
        Ok(ids.iter().filter_map(|id| self.players.get(id).cloned()).collect())
    }

    async fn friends_list(&self, id: SteamId) -> Result<Vec<Friend>, SteamError> {
        if self.private_friends {
            return Err(SteamError::new("GetFriendList", ErrorKind::Http(401), "HTTP 401 Unauthorized"));
        }
        Ok(self.friends.get(&id).cloned().unwrap_or_default())
    }
}

pub fn player(account: u32, name: &str) -> Player {
    Player {
        steam_id: SteamId::from_account_id(account),
        name: name.to_string(),
        profile_url: format!("https://steamcommunity.com/profiles/{}", SteamId::from_account_id(account)),
        avatar_full: format!("https://avatars.example/{}.jpg", account),
        persona_state: PersonaState::Online,
        ..Player::default()
    }
}

/// Friend `account` named `friend<account>`, befriended at `since`
pub fn friend(account: u32, since: i64) -> (Friend, Player) {
    (
        Friend {
            steam_id: SteamId::from_account_id(account),
            friends_since: since,
        },
        player(account, &format!("friend{}", account)),
    )
}
