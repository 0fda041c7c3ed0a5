//! CLI argument definitions for nxstage.
//!
//! Every flag is optional: a bare `nxstage` queries Sonatype OSSRH with the
//! credentials from `NEXUS_USERNAME` / `NEXUS_PASSWORD`. Credentials are
//! deliberately not accepted as flags so they never appear in a process list.

use clap::Parser;

use nxstage_nexus::endpoint::SONATYPE_OSS_URL;

#[derive(Parser, Debug)]
#[command(
    name = "nxstage",
    version,
    about = "Print the ID of the sole Nexus staging repository",
    long_about = "Queries the Nexus staging API for the profile repositories visible to \
                  NEXUS_USERNAME and prints the repositoryId of the single staged repository. \
                  Exits with status 1 if there is not exactly one."
)]
pub struct Cli {
    /// Nexus server base URL
    #[arg(long, env = "NEXUS_STAGING_URL", default_value = SONATYPE_OSS_URL)]
    pub url: String,

    /// Only list repositories of this staging profile ID
    #[arg(long, env = "NEXUS_STAGING_PROFILE")]
    pub profile: Option<String>,

    /// Only consider repositories in this state (e.g. open, closed)
    #[arg(long)]
    pub state: Option<String>,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "nxstage",
            "--url",
            "https://nexus.example.com",
            "--profile",
            "1a2b3c",
            "--state",
            "open",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.url, "https://nexus.example.com");
        assert_eq!(cli.profile.as_deref(), Some("1a2b3c"));
        assert_eq!(cli.state.as_deref(), Some("open"));
        assert!(cli.verbose);
    }
}
