//! Nexus staging endpoint: server base URL and REST path layout.

/// Sonatype OSSRH, the server the CI pipeline publishes to.
pub const SONATYPE_OSS_URL: &str = "https://oss.sonatype.org";

/// Path of the staging profile repository listing, relative to the base URL.
pub const PROFILE_REPOSITORIES_PATH: &str = "service/local/staging/profile_repositories";

/// A Nexus server exposing the staging REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingEndpoint {
    pub base_url: String,
}

impl StagingEndpoint {
    /// Build an endpoint from a server base URL. A trailing `/` is dropped.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Construct the default Sonatype OSSRH endpoint.
    pub fn sonatype_oss() -> Self {
        Self::new(SONATYPE_OSS_URL)
    }

    /// URL listing staging repositories, optionally for a single profile.
    ///
    /// `profile_repositories_url(None)` on OSSRH is
    /// `https://oss.sonatype.org/service/local/staging/profile_repositories`
    pub fn profile_repositories_url(&self, profile_id: Option<&str>) -> String {
        match profile_id {
            Some(id) => format!("{}/{}/{}", self.base_url, PROFILE_REPOSITORIES_PATH, id),
            None => format!("{}/{}", self.base_url, PROFILE_REPOSITORIES_PATH),
        }
    }
}

impl Default for StagingEndpoint {
    fn default() -> Self {
        Self::sonatype_oss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_matches_ossrh_listing() {
        let endpoint = StagingEndpoint::default();
        assert_eq!(
            endpoint.profile_repositories_url(None),
            "https://oss.sonatype.org/service/local/staging/profile_repositories"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let endpoint = StagingEndpoint::new("https://nexus.example.com/");
        assert_eq!(endpoint.base_url, "https://nexus.example.com");
        assert_eq!(
            endpoint.profile_repositories_url(None),
            "https://nexus.example.com/service/local/staging/profile_repositories"
        );
    }

    #[test]
    fn profile_id_is_appended() {
        let endpoint = StagingEndpoint::sonatype_oss();
        let url = endpoint.profile_repositories_url(Some("1a2b3c4d5e"));
        assert!(url.ends_with("/staging/profile_repositories/1a2b3c4d5e"));
    }

    #[test]
    fn base_url_with_context_path() {
        let endpoint = StagingEndpoint::new("https://repo.example.com/nexus");
        assert_eq!(
            endpoint.profile_repositories_url(None),
            "https://repo.example.com/nexus/service/local/staging/profile_repositories"
        );
    }
}
