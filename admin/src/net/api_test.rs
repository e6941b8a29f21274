use super::*;

#[test]
fn list_endpoint_maps_known_lists() {
    assert!(list_endpoint("categories").expect("categories").ends_with("/category/"));
    assert!(list_endpoint("colors").expect("colors").ends_with("/color/"));
    assert!(list_endpoint("sizes").expect("sizes").ends_with("/size/"));
}

#[test]
fn list_endpoint_rejects_unknown_list() {
    assert_eq!(list_endpoint("brands"), None);
}

#[test]
fn list_request_failed_message_formats_status() {
    assert_eq!(list_request_failed_message("colors", 503), "colors request failed: 503");
}
