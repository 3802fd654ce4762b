//! # Profile Command
//!
//! Handles `.profile <player>`: status, current game, account age and country of one player.

use crate::application::embed_formatter::or_placeholder;
use crate::application::logging::RequestLog;
use crate::domain::traits::{ChatProvider, SteamProvider};
use crate::domain::types::{Embed, EmbedAuthor, EmbedField, Player, Visibility};
use crate::interface::commands::friends::STEAM_COLOR;
use crate::interface::commands::{lookup, reply};
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_profile(
    chat: &impl ChatProvider,
    steam: &dyn SteamProvider,
    log: &RequestLog,
    args: &str,
) -> Result<()> {
    let input = args.trim();
    if input.is_empty() {
        chat.send_notification(messages::PROFILE_USAGE).await.map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let Some(player) = lookup::lookup_player(chat, steam, log, input).await? else {
        return Ok(());
    };

    reply::send_embed(chat, &profile_embed(&player)).await
}

fn member_since(player: &Player) -> String {
    player
        .time_created
        .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn profile_embed(player: &Player) -> Embed {
    Embed {
        author: Some(EmbedAuthor {
            name: messages::author_line(player.status_emoji(), &player.name),
            url: Some(player.profile_url.clone()),
        }),
        thumbnail: Some(player.avatar_full.clone()),
        fields: vec![
            EmbedField::inline("Status", player.status()),
            EmbedField::inline("Game", or_placeholder(player.game.as_deref().unwrap_or_default())),
            EmbedField::inline("Steam ID", player.steam_id.to_string()),
            EmbedField::inline("Member Since", or_placeholder(&member_since(player))),
            EmbedField::inline("Country", or_placeholder(player.country.as_deref().unwrap_or_default())),
        ],
        footer: (player.visibility == Visibility::Private)
            .then(|| messages::PROFILE_PRIVATE_FOOTER.to_string()),
        color: STEAM_COLOR,
    }
}
