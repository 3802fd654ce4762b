//! # Domain Traits
//!
//! Abstract interfaces for core system components (Chat, Steam).
//! Allows for pluggable implementations in the Infrastructure layer.

use crate::domain::error::Error as SteamError;
use crate::domain::types::{Friend, Player, SteamId};
use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a notification (not tracked/editable)
    async fn send_notification(&self, content: &str) -> Result<(), String>;

    /// Send a typing indicator
    async fn typing(&self, active: bool) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Abstract interface for the Steam Web API
#[async_trait]
pub trait SteamProvider: Send + Sync {
    /// Turn a user supplied identifier (ID, profile URL, vanity name) into a SteamID64
    async fn resolve_steam_id(&self, input: &str) -> Result<SteamId, SteamError>;

    /// Summaries for the given accounts. Order of the result is not guaranteed.
    async fn player_summaries(&self, ids: &[SteamId]) -> Result<Vec<Player>, SteamError>;

    /// Friends of the given account
    async fn friends_list(&self, id: SteamId) -> Result<Vec<Friend>, SteamError>;
}
