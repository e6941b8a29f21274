use super::*;

#[test]
fn normalize_base_url_appends_single_trailing_slash() {
    assert_eq!(normalize_base_url("http://api.local/api"), "http://api.local/api/");
    assert_eq!(normalize_base_url("http://api.local/api///"), "http://api.local/api/");
}

#[test]
fn normalize_base_url_falls_back_to_default_when_blank() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
}

#[test]
fn join_url_avoids_double_slash() {
    assert_eq!(join_url("http://api.local/api/", "/product/"), "http://api.local/api/product/");
    assert_eq!(join_url("http://api.local/api/", "size/"), "http://api.local/api/size/");
}

#[test]
fn endpoint_uses_configured_base() {
    let url = endpoint(PRODUCT_PATH);
    assert!(url.ends_with("/product/"));
    assert!(url.starts_with(&api_base_url()));
}
