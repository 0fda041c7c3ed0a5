//! Request authentication for the Nexus staging API.
//!
//! Nexus 2 accepts HTTP Basic auth on every REST call, so the credentials
//! are attached as `Authorization: Basic base64(username:password)`.

use reqwest::blocking::RequestBuilder;

use crate::credentials::Credentials;

/// Apply Basic authentication to a request.
pub fn apply_auth(request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
    request.basic_auth(&credentials.username, Some(&credentials.password))
}
