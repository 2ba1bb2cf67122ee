// API client module: a small blocking HTTP client for the lovli.fyi
// shortening service. The whole exchange is one POST with a JSON body
// and a JSON body back, so the client stays synchronous and flat.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "https://lovli.fyi/redirections";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A successfully shortened URL, as returned by the service on a 200.
#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct Redirection {
    pub short_url: String,
}

/// Request payload for the shorten endpoint.
#[derive(Serialize, Debug)]
struct ShortenRequest<'a> {
    location: &'a str,
}

/// Everything that can go wrong between sending the request and holding
/// a short URL. Transport and decode failures keep their source error;
/// the status-code variants carry the exact message shown to the user.
#[derive(Error, Debug)]
pub enum ShortenError {
    #[error("transport error ({0})")]
    Transport(#[from] reqwest::Error),

    #[error("unmarshaling error ({0})")]
    Decode(#[from] serde_json::Error),

    #[error("invalid URL")]
    InvalidUrl,

    #[error("try again later")]
    RateLimited,

    #[error("unexpected error ({0})")]
    Unexpected(u16),
}

/// Holds a reqwest blocking client and the endpoint URL it posts to.
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a client pointed at `LOVLI_ENDPOINT` if set, or the
    /// production endpoint otherwise.
    pub fn from_env() -> Result<Self> {
        let endpoint =
            std::env::var("LOVLI_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, endpoint })
    }

    /// POST the long URL and interpret the response. The caller hands in
    /// a trimmed, non-empty string; no validation happens here.
    pub fn shorten(&self, long_url: &str) -> Result<Redirection, ShortenError> {
        let res = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&ShortenRequest { location: long_url })
            .send()?;
        let status = res.status();
        let body = res.text()?;
        interpret(status, &body)
    }
}

/// Classify a response into a Redirection or a domain error. Kept as a
/// pure function over status and body text so it can be exercised
/// without a server.
fn interpret(status: StatusCode, body: &str) -> Result<Redirection, ShortenError> {
    match status {
        StatusCode::OK => Ok(serde_json::from_str(body)?),
        StatusCode::BAD_REQUEST => Err(ShortenError::InvalidUrl),
        StatusCode::TOO_MANY_REQUESTS => Err(ShortenError::RateLimited),
        other => Err(ShortenError::Unexpected(other.as_u16())),
    }
}
