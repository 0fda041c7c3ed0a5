use miette::Diagnostic;
use thiserror::Error;

/// Exit code for the "not exactly one staging repository" condition.
pub const EXIT_CARDINALITY: u8 = 1;

/// Exit code for every other failure.
pub const EXIT_FAILURE: u8 = 2;

/// Unified error type for all nxstage operations.
#[derive(Debug, Error, Diagnostic)]
pub enum StagingError {
    /// Missing or unusable configuration (e.g. an unset credential variable).
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Export NEXUS_USERNAME and NEXUS_PASSWORD before running nxstage"))]
    Config { message: String },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Network error: {message}")]
    Transport { message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    #[diagnostic(help("A 401 usually means the Nexus credentials were rejected"))]
    Protocol { status: u16, url: String },

    /// The response body was not the expected JSON shape.
    #[error("Invalid staging response: {message}")]
    Data { message: String },

    /// The listing did not contain exactly one staging repository.
    #[error(
        "Zero or more than one staging repository (found {count}). Exiting. \
         Please execute the process manually."
    )]
    Cardinality { count: usize },
}

impl StagingError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            StagingError::Cardinality { .. } => EXIT_CARDINALITY,
            _ => EXIT_FAILURE,
        }
    }
}

/// Convenience alias used throughout the nxstage crates.
pub type StagingResult<T> = Result<T, StagingError>;
