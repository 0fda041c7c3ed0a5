//! Nexus credentials sourced from the process environment.
//!
//! CI systems expose the deployer account as two secrets:
//!
//! ```sh
//! export NEXUS_USERNAME=deployer
//! export NEXUS_PASSWORD=...
//! ```
//!
//! Both are read once at startup into a [`Credentials`] value that is passed
//! explicitly to the fetch. Values are used verbatim, with no trimming.

use std::env::VarError;
use std::fmt;

use nxstage_util::errors::{StagingError, StagingResult};

/// Environment variable holding the Nexus username.
pub const USERNAME_VAR: &str = "NEXUS_USERNAME";

/// Environment variable holding the Nexus password.
pub const PASSWORD_VAR: &str = "NEXUS_PASSWORD";

/// Username and password for HTTP Basic auth against Nexus.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `NEXUS_USERNAME` and `NEXUS_PASSWORD`.
    pub fn from_env() -> StagingResult<Self> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Read credentials through `lookup`, which has the shape of
    /// [`std::env::var`].
    ///
    /// An unset or non-UTF-8 variable is a configuration error. Empty values
    /// are accepted.
    pub fn from_lookup<F>(lookup: F) -> StagingResult<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let username = required(&lookup, USERNAME_VAR)?;
        let password = required(&lookup, PASSWORD_VAR)?;
        Ok(Self { username, password })
    }
}

fn required<F>(lookup: &F, key: &str) -> StagingResult<String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    lookup(key).map_err(|e| match e {
        VarError::NotPresent => StagingError::Config {
            message: format!("{key} is not set"),
        },
        VarError::NotUnicode(_) => StagingError::Config {
            message: format!("{key} is not valid UTF-8"),
        },
    })
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
