//! # Help Command
//!
//! Handles the `.help` command: lists the player commands and accepted identifier forms.

use crate::domain::traits::ChatProvider;
use crate::strings::help;
use anyhow::Result;

pub async fn handle_help(chat: &impl ChatProvider) -> Result<()> {
    chat.send_message(help::MAIN)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
