#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_raw_is_none_outside_browser() {
    assert_eq!(load_raw("user"), None);
}
