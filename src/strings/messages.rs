//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes error messages, usage hints, and embed texts.

pub const UNKNOWN_COMMAND: &str = "❓ Unknown command. Try `.help`.";

pub const FRIENDS_USAGE: &str = "Usage: `.friends <steam id | profile url | custom url>`";
pub const PROFILE_USAGE: &str = "Usage: `.profile <steam id | profile url | custom url>`";

pub const RESOLVE_FAILED: &str = "unable to resolve player ID";
pub const SUMMARY_FAILED: &str = "unable to retrieve player summary";

pub fn command_error(err: &str, request_id: &str) -> String {
    format!("❌ {err} (ref `{request_id}`)")
}

pub const FRIENDS_FOOTER: &str =
    "Friend information is dependent upon the user's privacy settings.";
pub const PROFILE_PRIVATE_FOOTER: &str = "This profile is private.";

pub fn top_friends_title(cap: usize) -> String {
    format!("Top {cap} Friends")
}

pub fn author_line(status_emoji: &str, name: &str) -> String {
    format!("{status_emoji} {name}")
}
