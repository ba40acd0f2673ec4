//! Module for retrieving the top 10 leaderboard from the scores server
use crate::{
    config::Config,
    leaderboard::models::{Diagnostic, PlayerScoreEntry},
};
use log::debug;
use reqwest::{header, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// HTTP client for the leaderboard endpoint on the scores server
pub struct Retriever {
    client: Client,
    /// Scheme, host and port of the scores server
    base_url: String,
}

/// Error type for leaderboard request errors
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never produced a response
    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server responded with a non success status
    #[error("Server responded with {status}")]
    Status { status: StatusCode, body: String },
    /// The response body was not a list of player scores
    #[error("Failed to parse response: {source}")]
    Parse {
        status: StatusCode,
        body: String,
        source: serde_json::Error,
    },
}

impl RequestError {
    /// Collapses the error into the status and raw body of the response
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Self::Transport(_) => Diagnostic {
                status: 0,
                body: String::new(),
            },
            Self::Status { status, body } | Self::Parse { status, body, .. } => Diagnostic {
                status: status.as_u16(),
                body: body.clone(),
            },
        }
    }
}

impl Retriever {
    /// Path of the top 10 endpoint
    pub const TOP10_PATH: &'static str = "/players/find_score_top10";
    /// Content type sent with the request
    pub const CONTENT_TYPE: &'static str = "application/json;charset=UTF-8";

    /// Creates a new retriever for the server in the provided config
    pub fn new(config: &Config) -> Result<Self, RequestError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The full url of the top 10 endpoint
    pub fn top10_url(&self) -> String {
        format!("{}{}", self.base_url, Self::TOP10_PATH)
    }

    /// Requests the top 10 players. The entries are returned in the
    /// order the server sent them
    pub async fn find_score_top10(&self) -> Result<Vec<PlayerScoreEntry>, RequestError> {
        let url = self.top10_url();
        debug!("Requesting leaderboard from {}", url);

        let response = self
            .client
            .get(url)
            .header(header::CONTENT_TYPE, Self::CONTENT_TYPE)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RequestError::Status { status, body });
        }

        match serde_json::from_str(&body) {
            Ok(entries) => Ok(entries),
            Err(source) => Err(RequestError::Parse {
                status,
                body,
                source,
            }),
        }
    }
}
