//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the command string (e.g., `.friends`) and dispatches it inside a request span.

use anyhow::Result;
use std::sync::Arc;
use tracing::Instrument;

use crate::application::logging::RequestLog;
use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, SteamProvider};
use crate::interface::commands;

pub struct CommandRouter {
    config: AppConfig,
    steam: Arc<dyn SteamProvider>,
}

impl CommandRouter {
    pub fn new(config: AppConfig, steam: Arc<dyn SteamProvider>) -> Self {
        Self { config, steam }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let msg = message.trim();
        let Some(body) = msg.strip_prefix(self.config.commands.prefix.as_str()) else {
            return Ok(());
        };

        let (cmd, args) = match body.find(char::is_whitespace) {
            Some(idx) => (&body[..idx], body[idx..].trim()),
            None => (body, ""),
        };
        if cmd.is_empty() {
            return Ok(());
        }

        tracing::info!(
            "Router dispatching cmd='{}' args='{}' sender='{}'",
            cmd,
            args,
            sender
        );

        let log = RequestLog::new(cmd, args, sender);
        let steam = self.steam.as_ref();

        async {
            match cmd.to_lowercase().as_str() {
                "friends" => commands::friends::handle_friends(chat, steam, &log, args).await,
                "profile" | "player" => commands::profile::handle_profile(chat, steam, &log, args).await,
                "help" => commands::help::handle_help(chat).await,
                _ => chat
                    .send_notification(crate::strings::messages::UNKNOWN_COMMAND)
                    .await
                    .map_err(|e| anyhow::anyhow!(e)),
            }
        }
        .instrument(log.span())
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::messages;
    use crate::testing::{FakeChat, FakeSteam, player};

    fn router(steam: FakeSteam) -> CommandRouter {
        let config = AppConfig::parse(
            "services:\n  matrix:\n    username: bot\n    password: pw\n    homeserver: https://matrix.example.org\n",
        )
        .unwrap();
        CommandRouter::new(config, Arc::new(steam))
    }

    #[tokio::test]
    async fn test_plain_chat_ignored() {
        let chat = FakeChat::default();
        router(FakeSteam::default()).route(&chat, "hello there", "@a:b").await.unwrap();
        router(FakeSteam::default()).route(&chat, ".", "@a:b").await.unwrap();
        assert!(chat.messages().is_empty());
        assert!(chat.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let chat = FakeChat::default();
        router(FakeSteam::default()).route(&chat, ".teleport home", "@a:b").await.unwrap();
        assert_eq!(chat.notifications(), vec![messages::UNKNOWN_COMMAND.to_string()]);
    }

    #[tokio::test]
    async fn test_help() {
        let chat = FakeChat::default();
        router(FakeSteam::default()).route(&chat, "  .help  ", "@a:b").await.unwrap();
        assert_eq!(chat.messages(), vec![crate::strings::help::MAIN.to_string()]);
    }

    #[tokio::test]
    async fn test_friends_dispatch_passes_trimmed_args() {
        let chat = FakeChat::default();
        let steam = FakeSteam::default().with_player("gabe", player(1, "gabe"));
        router(steam).route(&chat, ".Friends    gabe ", "@a:b").await.unwrap();

        assert!(chat.notifications().is_empty());
        assert!(chat.messages()[0].contains("**Count**: 0"));
    }

    #[tokio::test]
    async fn test_profile_alias() {
        let chat = FakeChat::default();
        let steam = FakeSteam::default().with_player("gabe", player(1, "gabe"));
        router(steam).route(&chat, ".player gabe", "@a:b").await.unwrap();
        assert!(chat.messages()[0].contains("**Steam ID**: 76561197960265729"));
    }
}
