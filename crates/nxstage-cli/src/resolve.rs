use nxstage_nexus::client::build_client;
use nxstage_nexus::credentials::Credentials;
use nxstage_nexus::endpoint::StagingEndpoint;
use nxstage_nexus::staging::{fetch_repository_id, RepositoryFilter, StagingQuery};
use nxstage_util::errors::StagingResult;

use crate::cli::Cli;

/// Resolve the sole staging repository ID for the parsed invocation.
pub fn exec(args: &Cli) -> StagingResult<String> {
    let credentials = Credentials::from_env()?;
    let endpoint = StagingEndpoint::new(&args.url);
    let query = StagingQuery {
        profile_id: args.profile.clone(),
        filter: RepositoryFilter {
            state: args.state.clone(),
        },
    };

    let client = build_client()?;
    let id = fetch_repository_id(&client, &endpoint, &credentials, &query)?;
    tracing::info!("Resolved staging repository {id}");
    Ok(id)
}
