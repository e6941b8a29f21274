//! Browser-side helpers for backend calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` reads raw localStorage values and `auth` turns the cached
//! `user` credential into request headers for `net::api`.

pub mod auth;
pub mod storage;
