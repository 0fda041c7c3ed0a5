//! Synchronous HTTP access to the Nexus staging API.
//!
//! A single blocking `GET` per invocation. There are no retries, and the
//! client keeps reqwest's default timeout.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use nxstage_util::errors::{StagingError, StagingResult};

use crate::auth;
use crate::credentials::Credentials;

const USER_AGENT: &str = concat!("nxstage/", env!("CARGO_PKG_VERSION"));

/// Build the blocking client used for staging API calls.
pub fn build_client() -> StagingResult<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| StagingError::Transport {
            message: format!("Failed to create HTTP client: {e}"),
        })
}

/// `GET` a JSON resource with Basic auth and return the raw body.
pub fn fetch_body(client: &Client, url: &str, credentials: &Credentials) -> StagingResult<Vec<u8>> {
    tracing::debug!("GET {url} as {}", credentials.username);

    let req = client.get(url).header(ACCEPT, "application/json");
    let resp = auth::apply_auth(req, credentials)
        .send()
        .map_err(|e| StagingError::Transport {
            message: format!("Request to {url} failed: {e}"),
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(StagingError::Protocol {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let bytes = resp.bytes().map_err(|e| StagingError::Transport {
        message: format!("Failed to read response from {url}: {e}"),
    })?;
    tracing::debug!("{status} from {url} ({} bytes)", bytes.len());
    Ok(bytes.to_vec())
}
