//! REST API helpers for the catalog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! cached bearer token from `util::auth`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed list fetch or
//! submission degrades to a toast without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::multipart::MultipartPayload;
use super::types::{Category, Color, CreateProductResponse, Size};
#[cfg(any(test, feature = "hydrate"))]
use crate::config;

#[cfg(any(test, feature = "hydrate"))]
fn list_request_failed_message(list: &str, status: u16) -> String {
    format!("{list} request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_endpoint(list: &str) -> Option<String> {
    let path = match list {
        "categories" => config::CATEGORY_PATH,
        "colors" => config::COLOR_PATH,
        "sizes" => config::SIZE_PATH,
        _ => return None,
    };
    Some(config::endpoint(path))
}

#[cfg(feature = "hydrate")]
async fn fetch_list<T: serde::de::DeserializeOwned>(list: &str) -> Result<Vec<T>, String> {
    let url = list_endpoint(list).ok_or_else(|| format!("unknown list: {list}"))?;
    let mut req = gloo_net::http::Request::get(&url);
    for (name, value) in crate::util::auth::auth_headers() {
        req = req.header(name, &value);
    }
    let resp = req.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(list_request_failed_message(list, resp.status()));
    }
    resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
}

/// Fetch product categories from `GET category/`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list("categories").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch colors from `GET color/`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_colors() -> Result<Vec<Color>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list("colors").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch sizes from `GET size/`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_sizes() -> Result<Vec<Size>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list("sizes").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a product via multipart `POST product/`.
///
/// Any HTTP status is returned to the caller; only transport failures are errors.
///
/// # Errors
///
/// Returns an error string if the payload cannot be encoded or the request never completes.
pub async fn create_product(payload: &MultipartPayload) -> Result<CreateProductResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let form = payload.to_form_data()?;
        let mut req = gloo_net::http::Request::post(&config::endpoint(config::PRODUCT_PATH));
        for (name, value) in crate::util::auth::auth_headers() {
            req = req.header(name, &value);
        }
        let resp = req
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.json::<serde_json::Value>().await.ok();
        Ok(CreateProductResponse { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
