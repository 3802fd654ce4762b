//! # Friends Command
//!
//! Handles `.friends <player>`.
//! Resolves the player, pulls their friends list, looks up the oldest `FRIENDS_CAP`
//! friends plus the newest one and replies with a single embed.
//!
//! The friends list and the friend summaries are soft failures: a private profile or a
//! failed lookup still produces a reply, just with empty sections.

use crate::application::embed_formatter::or_placeholder;
use crate::application::friends::{self, FRIENDS_CAP, FriendsReport};
use crate::application::logging::RequestLog;
use crate::domain::error::ErrorKind;
use crate::domain::traits::{ChatProvider, SteamProvider};
use crate::domain::types::{Embed, EmbedAuthor, EmbedField, Player, SteamId};
use crate::interface::commands::{lookup, reply};
use crate::strings::{logs, messages};
use anyhow::Result;

pub const STEAM_COLOR: u32 = 0x66c0f4;

pub async fn handle_friends(
    chat: &impl ChatProvider,
    steam: &dyn SteamProvider,
    log: &RequestLog,
    args: &str,
) -> Result<()> {
    let input = args.trim();
    if input.is_empty() {
        chat.send_notification(messages::FRIENDS_USAGE).await.map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let _ = chat.typing(true).await;
    let result = run(chat, steam, log, input).await;
    let _ = chat.typing(false).await;
    result
}

async fn run(
    chat: &impl ChatProvider,
    steam: &dyn SteamProvider,
    log: &RequestLog,
    input: &str,
) -> Result<()> {
    let Some(player) = lookup::lookup_player(chat, steam, log, input).await? else {
        return Ok(());
    };

    let friends_list = match steam.friends_list(player.steam_id).await {
        Ok(list) => list,
        Err(e) if e.kind == ErrorKind::Http(401) => {
            tracing::info!(error = %e, "{}", logs::FRIENDS_LIST_PRIVATE);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "{}", logs::FRIENDS_LIST_FAILED);
            Vec::new()
        }
    };

    let sorted = friends::sort_friends(friends_list);
    let capped = friends::cap_friends(&sorted);

    let ids: Vec<SteamId> = capped.iter().map(|f| f.steam_id).collect();
    let summaries = if ids.is_empty() {
        Vec::new()
    } else {
        steam.player_summaries(&ids).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "{}", logs::FRIEND_SUMMARIES_FAILED);
            Vec::new()
        })
    };

    let now = chrono::Utc::now().timestamp();
    let report = friends::build_report(sorted.len(), &capped, &summaries, now);
    tracing::info!(
        total = report.total,
        capped = capped.len(),
        listed = report.listed,
        "friends report built"
    );

    reply::send_embed(chat, &friends_embed(&player, &report)).await
}

pub fn friends_embed(player: &Player, report: &FriendsReport) -> Embed {
    Embed {
        author: Some(EmbedAuthor {
            name: messages::author_line(player.status_emoji(), &player.name),
            url: Some(player.profile_url.clone()),
        }),
        thumbnail: Some(player.avatar_full.clone()),
        fields: vec![
            EmbedField::inline("Newest", or_placeholder(&report.newest)),
            EmbedField::inline("Oldest", or_placeholder(&report.oldest)),
            EmbedField::inline("Count", report.total.to_string()),
            EmbedField::inline(messages::top_friends_title(FRIENDS_CAP), or_placeholder(&report.names)),
            EmbedField::inline("Friends For", or_placeholder(&report.friends_for)),
            EmbedField::inline("Status", or_placeholder(&report.statuses)),
        ],
        footer: Some(messages::FRIENDS_FOOTER.to_string()),
        color: STEAM_COLOR,
    }
}
