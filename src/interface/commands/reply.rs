//! # Replies
//!
//! The two ways a command ends: an embed with data, or a short error notice.

use crate::application::embed_formatter::EmbedFormatter;
use crate::application::logging::RequestLog;
use crate::domain::traits::ChatProvider;
use crate::domain::types::Embed;
use crate::strings::{logs, messages};
use anyhow::Result;

pub async fn send_embed(chat: &impl ChatProvider, embed: &Embed) -> Result<()> {
    let body = EmbedFormatter::format(embed);
    match chat.send_message(&body).await {
        Ok(event_id) => {
            tracing::info!(event_id = %event_id, "reply sent");
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", logs::reply_failed(&e));
            Err(anyhow::anyhow!(e))
        }
    }
}

pub async fn send_error(chat: &impl ChatProvider, log: &RequestLog, message: &str) -> Result<()> {
    chat.send_notification(&messages::command_error(message, &log.id.to_string()))
        .await
        .map_err(|e| {
            tracing::error!("{}", logs::reply_failed(&e));
            anyhow::anyhow!(e)
        })
}
