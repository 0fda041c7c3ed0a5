//! Nexus staging protocol: credentials, endpoint URL layout, authenticated
//! fetch, and selection of the sole staging repository.

pub mod auth;
pub mod client;
pub mod credentials;
pub mod endpoint;
pub mod staging;
