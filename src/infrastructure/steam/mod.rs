//! Steam Web API client
//!
//! Thin wrapper over the `ISteamUser` endpoints the bot needs:
//! vanity URL resolution, player summaries and friend lists.
//!
//! ```rust,no_run
//! let client = SteamClient::new(&config.services.steam)?;
//! let id = client.resolve_steam_id("gabelogannewell").await?;
//! let players = client.player_summaries(&[id]).await?;
//! ```

mod client;
mod identifier;
mod types;

pub use client::SteamClient;
pub use crate::domain::error::{Error, ErrorKind};
pub use identifier::{Identifier, parse_identifier};
