//! Networking modules for the catalog REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `multipart` assembles the create-product
//! body, and `types` defines the backend's JSON rows.

pub mod api;
pub mod multipart;
pub mod types;
