//! # Log Strings
//!
//! Text of log records emitted by the bot.

pub fn config_loaded(user: &str) -> String {
    format!("Loaded configuration for user: {user}")
}

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id}")
}

pub fn invite_join_fail(room_id: &str, err: &str) -> String {
    format!("Failed to join room {room_id}: {err}")
}

pub fn route_fail(err: &str) -> String {
    format!("Failed to route message: {err}")
}

pub const FRIENDS_LIST_PRIVATE: &str = "friends list is private";
pub const FRIENDS_LIST_FAILED: &str = "unable to retrieve friends list";
pub const FRIEND_SUMMARIES_FAILED: &str = "unable to retrieve friend summaries";

pub fn reply_failed(err: &str) -> String {
    format!("Failed to send reply: {err}")
}
