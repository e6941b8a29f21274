//! Bearer-token headers for backend calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront login flow caches the signed-in user as JSON under the
//! `user` key in `localStorage`. Every REST helper in `net::api` attaches the
//! token found there; this module only reads it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;

use super::storage;

pub const CREDENTIAL_KEY: &str = "user";

/// The cached login, reduced to what outgoing requests need.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Credential {
    pub token: String,
}

/// Parse the JSON cached under [`CREDENTIAL_KEY`].
pub fn parse_credential(raw: &str) -> Option<Credential> {
    serde_json::from_str(raw).ok()
}

/// Read the cached credential at call time.
pub fn load_credential() -> Option<Credential> {
    storage::load_raw(CREDENTIAL_KEY).and_then(|raw| parse_credential(&raw))
}

/// `Authorization` header value; an absent credential sends an empty token.
pub fn bearer_value(credential: Option<&Credential>) -> String {
    format!("Bearer {}", credential.map_or("", |c| c.token.as_str()))
}

/// Headers attached to every backend request.
pub fn headers_for(credential: Option<&Credential>) -> [(&'static str, String); 2] {
    [
        ("Authorization", bearer_value(credential)),
        ("Accept", "application/json".to_owned()),
    ]
}

/// Headers built from the credential currently in storage.
pub fn auth_headers() -> [(&'static str, String); 2] {
    headers_for(load_credential().as_ref())
}
