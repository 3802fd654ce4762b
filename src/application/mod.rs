//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot.
//! This includes command routing, the friends merge, reply formatting, and request logging.

pub mod embed_formatter;
pub mod friends;
pub mod logging;
pub mod router;
