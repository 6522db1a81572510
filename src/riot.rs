//! Riot API client.
//!
//! Talks to the regional REST endpoints (`https://<region>.api.pvp.net`),
//! authenticating with the `api_key` query parameter. The base URL is
//! injectable so tests can point the client at a mock server.

use std::collections::HashMap;

use reqwest::{Client, StatusCode};

use crate::model::{RawMatch, RawSummoner, Region, Summoner};

/// The by-name endpoint accepts at most this many summoner names per call.
pub const MAX_SUMMONERS_PER_REQUEST: usize = 40;

#[derive(Debug)]
pub enum RiotError {
    NotFound,
    RateLimited,
    Unauthorized,
    ApiError { status: u16, body: String },
    NetworkError(String),
    DecodeError(String),
}

impl std::fmt::Display for RiotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiotError::NotFound => write!(f, "resource not found on the Riot API"),
            RiotError::RateLimited => {
                write!(f, "rate limited by the Riot API, retry later")
            }
            RiotError::Unauthorized => {
                write!(f, "Riot API rejected the token (expired or invalid key)")
            }
            RiotError::ApiError { status, body } => {
                write!(f, "Riot API error {}: {}", status, body)
            }
            RiotError::NetworkError(msg) => write!(f, "network error: {}", msg),
            RiotError::DecodeError(msg) => write!(f, "unreadable Riot API response: {}", msg),
        }
    }
}

impl std::error::Error for RiotError {}

pub struct RiotClient {
    http: Client,
    base_url: String,
    region: Region,
    token: String,
}

impl RiotClient {
    pub fn new(region: Region, token: &str) -> Self {
        let base_url = format!("https://{}.api.pvp.net", region.slug());
        Self::with_base_url(&base_url, region, token)
    }

    pub fn with_base_url(base_url: &str, region: Region, token: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            region,
            token: token.to_string(),
        }
    }

    /// Fetch one match by id from the match endpoint.
    pub async fn get_match(&self, id: i64) -> Result<RawMatch, RiotError> {
        let url = format!(
            "{}/api/lol/{}/v2.2/match/{}",
            self.base_url,
            self.region.slug(),
            id
        );
        self.get_json(&url).await
    }

    /// Fetch summoner profiles by name. The endpoint keys its response by
    /// the canonical name form (lower-case, spaces stripped); the result
    /// preserves that keying so callers can report unresolved names.
    pub async fn get_summoners_by_name(
        &self,
        names: &[String],
    ) -> Result<HashMap<String, Summoner>, RiotError> {
        let joined = names
            .iter()
            .map(|n| canonical_name(n))
            .collect::<Vec<_>>()
            .join(",");
        let url = format!(
            "{}/api/lol/{}/v1.4/summoner/by-name/{}",
            self.base_url,
            self.region.slug(),
            joined
        );
        let raw: HashMap<String, RawSummoner> = self.get_json(&url).await?;
        Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, RiotError> {
        let response = self
            .http
            .get(url)
            .query(&[("api_key", self.token.as_str())])
            .send()
            .await
            .map_err(|e| RiotError::NetworkError(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(RiotError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => return Err(RiotError::RateLimited),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(RiotError::Unauthorized)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                return Err(RiotError::ApiError {
                    status: status.as_u16(),
                    body,
                });
            }
        }

        response
            .json()
            .await
            .map_err(|e| RiotError::DecodeError(e.to_string()))
    }
}

/// Canonical summoner name used as request path segment and response key.
pub fn canonical_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
