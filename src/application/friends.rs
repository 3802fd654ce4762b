//! # Friends Merge
//!
//! Sorting, capping and joining of a friends list with the matching player summaries.
//! Pure functions; the network side lives in the `.friends` command handler.

use std::collections::HashMap;

use crate::domain::types::{Friend, FriendData, Player, SteamId};

/// Upper bound of friends looked up and shown, keeps the reply under the event size limit.
pub const FRIENDS_CAP: usize = 50;

const DAY: i64 = 24 * 60 * 60;
const MONTH_DAYS: i64 = 30;
const YEAR_DAYS: i64 = 365;

/// Oldest friendship first. Stable, so equal timestamps keep API order.
pub fn sort_friends(mut friends: Vec<Friend>) -> Vec<Friend> {
    friends.sort_by_key(|f| f.friends_since);
    friends
}

/// First `FRIENDS_CAP` entries of a sorted list, with the newest friend always in the last slot.
///
/// This lets the newest friend be looked up in the same summaries call as the oldest ones.
pub fn cap_friends(sorted: &[Friend]) -> Vec<Friend> {
    let mut capped: Vec<Friend> = sorted.iter().take(FRIENDS_CAP).cloned().collect();
    if let (Some(slot), Some(newest)) = (capped.last_mut(), sorted.last()) {
        *slot = newest.clone();
    }
    capped
}

/// Joins by SteamID, keeping the order of `friends`. Friends without a summary are dropped.
pub fn join_friends(friends: &[Friend], players: &[Player]) -> Vec<FriendData> {
    let by_id: HashMap<SteamId, &Player> = players.iter().map(|p| (p.steam_id, p)).collect();
    friends
        .iter()
        .filter_map(|friend| {
            by_id.get(&friend.steam_id).map(|player| FriendData {
                friend: friend.clone(),
                player: (*player).clone(),
            })
        })
        .collect()
}

/// Everything the `.friends` reply needs, already flattened to display strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FriendsReport {
    pub total: usize,
    pub newest: String,
    pub oldest: String,
    pub names: String,
    pub statuses: String,
    pub friends_for: String,
    pub listed: usize,
}

pub fn build_report(total: usize, capped: &[Friend], players: &[Player], now: i64) -> FriendsReport {
    let joined = join_friends(capped, players);

    let name_of = |id: SteamId| {
        joined
            .iter()
            .find(|d| d.friend.steam_id == id)
            .map(|d| d.player.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    let mut report = FriendsReport {
        total,
        ..FriendsReport::default()
    };

    // Private profiles come back empty
    let (Some(first), Some(last)) = (capped.first(), capped.last()) else {
        return report;
    };
    report.oldest = name_of(first.steam_id);
    report.newest = name_of(last.steam_id);

    // At the cap the last slot holds the swapped-in newest friend, which is not part of the list
    let hidden = (capped.len() >= FRIENDS_CAP).then_some(last.steam_id);

    for data in joined.iter().filter(|d| Some(d.friend.steam_id) != hidden) {
        report.names.push_str(&format!("{}\n", data.player.name));
        report.statuses.push_str(&format!("{}\n", data.player.status()));
        report
            .friends_for
            .push_str(&format!("{}\n", format_friends_for(data.friend.friends_since, now)));
        report.listed += 1;
    }

    report
}

/// Elapsed time since `since`, e.g. `3y 2mo`, `4mo 12d`, `9d`, `today`.
pub fn format_friends_for(since: i64, now: i64) -> String {
    let days = (now - since).max(0) / DAY;
    let years = days / YEAR_DAYS;
    let months = (days % YEAR_DAYS) / MONTH_DAYS;

    if years > 0 {
        format!("{}y {}mo", years, months)
    } else if months > 0 {
        format!("{}mo {}d", months, days % YEAR_DAYS % MONTH_DAYS)
    } else if days > 0 {
        format!("{}d", days)
    } else {
        "today".to_string()
    }
}
