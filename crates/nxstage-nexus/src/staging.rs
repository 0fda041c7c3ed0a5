//! Staging repository listing and selection of the sole active repository.
//!
//! `GET .../staging/profile_repositories` answers with:
//!
//! ```json
//! { "data": [ { "repositoryId": "orgexample-1042", "type": "open", ... } ] }
//! ```
//!
//! The release pipeline expects exactly one repository to be staged at a
//! time. Anything else stops the pipeline so a human can sort it out.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

use nxstage_util::errors::{StagingError, StagingResult};

use crate::client;
use crate::credentials::Credentials;
use crate::endpoint::StagingEndpoint;

// -----------------------------------------------------------------------
// Response types
// -----------------------------------------------------------------------

/// Body of the profile repository listing. Other top-level fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ProfileRepositories {
    pub data: Vec<StagingRepository>,
}

/// One entry of the listing, kept as raw JSON.
///
/// Entries are not validated on parse: the listing is counted first, and
/// only the fields nxstage reads are looked up afterwards. Anything else
/// Nexus sends, of any type, is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StagingRepository(pub Value);

impl StagingRepository {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// `repositoryId`, if present and a string.
    pub fn repository_id(&self) -> Option<&str> {
        self.str_field("repositoryId")
    }

    /// Repository state as reported by Nexus (`type`): `open`, `closed`, `released`.
    pub fn state(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn profile_name(&self) -> Option<&str> {
        self.str_field("profileName")
    }
}

// -----------------------------------------------------------------------
// Selection
// -----------------------------------------------------------------------

/// Client-side narrowing of the listing before the cardinality check.
#[derive(Debug, Clone, Default)]
pub struct RepositoryFilter {
    /// Keep only repositories in this state (ASCII case-insensitive).
    pub state: Option<String>,
}

impl RepositoryFilter {
    pub fn matches(&self, repo: &StagingRepository) -> bool {
        match (&self.state, repo.state()) {
            (None, _) => true,
            (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
            (Some(_), None) => false,
        }
    }

    pub fn apply(&self, repos: Vec<StagingRepository>) -> Vec<StagingRepository> {
        repos.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Parse a profile repository listing.
///
/// Fails only when the body is not JSON or `data` is missing or not an array.
pub fn parse_profile_repositories(body: &[u8]) -> StagingResult<ProfileRepositories> {
    serde_json::from_slice(body).map_err(|e| StagingError::Data {
        message: e.to_string(),
    })
}

/// Require exactly one repository and return it.
pub fn select_sole(repos: Vec<StagingRepository>) -> StagingResult<StagingRepository> {
    let count = repos.len();
    let mut iter = repos.into_iter();
    match (iter.next(), iter.next()) {
        (Some(repo), None) => Ok(repo),
        _ => Err(StagingError::Cardinality { count }),
    }
}

/// Resolve the ID of the sole staging repository from a raw listing body.
///
/// The cardinality check runs before any entry is inspected, so a listing
/// of two malformed entries is still a cardinality failure.
pub fn resolve_repository_id(body: &[u8], filter: &RepositoryFilter) -> StagingResult<String> {
    let listing = parse_profile_repositories(body)?;
    let total = listing.data.len();
    let candidates = filter.apply(listing.data);
    tracing::debug!(
        "{total} staging repositories listed, {} after filtering",
        candidates.len()
    );

    let repo = select_sole(candidates)?;
    if let Some(profile) = repo.profile_name() {
        tracing::info!("Selected staging repository in profile '{profile}'");
    }
    repo.repository_id()
        .map(str::to_string)
        .ok_or_else(|| StagingError::Data {
            message: "staging repository has no string `repositoryId`".to_string(),
        })
}

/// What to ask the staging endpoint for.
#[derive(Debug, Clone, Default)]
pub struct StagingQuery {
    pub profile_id: Option<String>,
    pub filter: RepositoryFilter,
}

/// Fetch the listing from `endpoint` and resolve the sole repository ID.
pub fn fetch_repository_id(
    client: &Client,
    endpoint: &StagingEndpoint,
    credentials: &Credentials,
    query: &StagingQuery,
) -> StagingResult<String> {
    let url = endpoint.profile_repositories_url(query.profile_id.as_deref());
    let body = client::fetch_body(client, &url, credentials)?;
    resolve_repository_id(&body, &query.filter)
}
