//! # Steam Client
//!
//! Provides the `SteamClient` struct, the `SteamProvider` used in production.
//! Handles URL building, API key injection, status checking and payload decoding.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::{
    Envelope, FriendEntry, FriendListEnvelope, PlayerSummary, PlayersResponse, VanityResponse,
};
use super::{Error, ErrorKind, Identifier, parse_identifier};
use crate::domain::config::SteamConfig;
use crate::domain::traits::SteamProvider;
use crate::domain::types::{Friend, Player, SteamId};

/// `GetPlayerSummaries` rejects more IDs than this in one call
const MAX_IDS_PER_REQUEST: usize = 100;

const RESOLVE_VANITY: &str = "ISteamUser/ResolveVanityURL/v1/";
const PLAYER_SUMMARIES: &str = "ISteamUser/GetPlayerSummaries/v2/";
const FRIEND_LIST: &str = "ISteamUser/GetFriendList/v1/";

pub struct SteamClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SteamClient {
    pub fn new(config: &SteamConfig) -> anyhow::Result<Self> {
        let api_key = config.resolve_api_key()?;
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("Steam GET {} {:?}", endpoint, query);

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("format", "json")])
            .query(query)
            .send()
            .await
            .map_err(|e| Error::new(endpoint, ErrorKind::Request, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::new(
                endpoint,
                ErrorKind::Http(status.as_u16()),
                format!("HTTP {}", status),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::new(endpoint, ErrorKind::Decode, format!("Failed to parse response: {}", e)))
    }

    async fn resolve_vanity(&self, vanity: &str) -> Result<SteamId, Error> {
        let envelope: Envelope<VanityResponse> = self
            .get_json(RESOLVE_VANITY, &[("vanityurl", vanity)])
            .await?;
        let resolved = envelope.response;

        if resolved.success != 1 {
            let reason = resolved.message.unwrap_or_else(|| "No match".to_string());
            return Err(Error::new(
                RESOLVE_VANITY,
                ErrorKind::NotFound,
                format!("{}: {}", vanity, reason),
            ));
        }

        resolved
            .steamid
            .as_deref()
            .and_then(|id| id.parse::<SteamId>().ok())
            .ok_or_else(|| Error::new(RESOLVE_VANITY, ErrorKind::Decode, "success without a valid steamid"))
    }
}

#[async_trait]
impl SteamProvider for SteamClient {
    async fn resolve_steam_id(&self, input: &str) -> Result<SteamId, Error> {
        match parse_identifier(input)? {
            Identifier::Id(id) => Ok(id),
            Identifier::Vanity(vanity) => self.resolve_vanity(&vanity).await,
        }
    }

    async fn player_summaries(&self, ids: &[SteamId]) -> Result<Vec<Player>, Error> {
        let mut players = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(MAX_IDS_PER_REQUEST) {
            let joined = chunk
                .iter()
                .map(SteamId::to_string)
                .collect::<Vec<_>>()
                .join(",");
            let envelope: Envelope<PlayersResponse> = self
                .get_json(PLAYER_SUMMARIES, &[("steamids", joined.as_str())])
                .await?;
            players.extend(
                envelope
                    .response
                    .players
                    .into_iter()
                    .filter_map(PlayerSummary::into_player),
            );
        }

        Ok(players)
    }

    async fn friends_list(&self, id: SteamId) -> Result<Vec<Friend>, Error> {
        let steam_id = id.to_string();
        let envelope: FriendListEnvelope = self
            .get_json(FRIEND_LIST, &[("steamid", steam_id.as_str()), ("relationship", "friend")])
            .await?;

        Ok(envelope
            .friendslist
            .friends
            .into_iter()
            .filter_map(FriendEntry::into_friend)
            .collect())
    }
}
