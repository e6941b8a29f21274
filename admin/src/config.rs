//! Backend endpoint configuration.
//!
//! The API base URL is fixed at compile time from `CATALOG_API_BASE_URL`,
//! since the WASM bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api/";

pub const PRODUCT_PATH: &str = "product/";
pub const CATEGORY_PATH: &str = "category/";
pub const COLOR_PATH: &str = "color/";
pub const SIZE_PATH: &str = "size/";

/// Route the UI navigates to after a product is created.
pub const PRODUCT_LIST_ROUTE: &str = "/admin/list-product";

/// Base URL for every backend call, always ending in `/`.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("CATALOG_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Join an endpoint path onto the configured base URL.
pub fn endpoint(path: &str) -> String {
    join_url(&api_base_url(), path)
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_URL.to_owned();
    }
    format!("{}/", trimmed.trim_end_matches('/'))
}

fn join_url(base: &str, path: &str) -> String {
    format!("{base}{}", path.trim_start_matches('/'))
}
