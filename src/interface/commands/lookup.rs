//! # Player Lookup
//!
//! Identifier resolution and primary summary, shared by the player commands.
//! Both steps are hard failures: the user gets an error notice and the command stops.

use crate::application::logging::RequestLog;
use crate::domain::traits::{ChatProvider, SteamProvider};
use crate::domain::types::Player;
use crate::domain::error::{Error as SteamError, ErrorKind};
use crate::interface::commands::reply;
use crate::strings::messages;
use anyhow::Result;

/// `Ok(None)` means the error reply has already been sent.
pub async fn lookup_player(
    chat: &impl ChatProvider,
    steam: &dyn SteamProvider,
    log: &RequestLog,
    input: &str,
) -> Result<Option<Player>> {
    let id = match steam.resolve_steam_id(input).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "{}", messages::RESOLVE_FAILED);
            reply::send_error(chat, log, messages::RESOLVE_FAILED).await?;
            return Ok(None);
        }
    };

    let player = steam.player_summaries(&[id]).await.and_then(|players| {
        players
            .into_iter()
            .find(|p| p.steam_id == id)
            .ok_or_else(|| SteamError::new("GetPlayerSummaries", ErrorKind::NotFound, format!("no player {}", id)))
    });

    match player {
        Ok(player) => Ok(Some(player)),
        Err(e) => {
            tracing::error!(error = %e, steam_id = %id, "{}", messages::SUMMARY_FAILED);
            reply::send_error(chat, log, messages::SUMMARY_FAILED).await?;
            Ok(None)
        }
    }
}
