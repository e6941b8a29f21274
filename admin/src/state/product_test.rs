use super::*;

// =============================================================
// ProductState
// =============================================================

#[test]
fn product_state_default_is_idle() {
    let state = ProductState::default();
    assert!(!state.is_loading);
    assert!(!state.is_success);
    assert!(!state.is_error);
    assert!(state.created_product.is_none());
}

#[test]
fn begin_rejects_second_request_while_loading() {
    let mut state = ProductState::default();
    assert!(state.begin());
    assert!(state.is_loading);
    assert!(!state.begin());
}

#[test]
fn begin_clears_previous_result() {
    let mut state = ProductState::default();
    state.fail("boom");
    assert!(state.begin());
    assert!(!state.is_error);
    assert!(state.message.is_none());
}

#[test]
fn succeed_stores_created_product() {
    let mut state = ProductState::default();
    state.begin();
    state.succeed(Some(serde_json::json!({ "id": 41 })));
    assert!(!state.is_loading);
    assert!(state.is_success);
    assert_eq!(state.created_product, Some(serde_json::json!({ "id": 41 })));
}

#[test]
fn fail_records_message() {
    let mut state = ProductState::default();
    state.begin();
    state.fail("status 500");
    assert!(state.is_error);
    assert!(!state.is_loading);
    assert_eq!(state.message.as_deref(), Some("status 500"));
    state.reset();
    assert_eq!(state, ProductState::default());
}

// =============================================================
// SubmitOutcome
// =============================================================

#[test]
fn status_200_navigates_to_product_list() {
    let outcome = SubmitOutcome::from_status(200);
    assert_eq!(outcome, SubmitOutcome::Created);
    assert_eq!(outcome.redirect(), Some("/admin/list-product"));
    assert_eq!(outcome.toast_text(), "Product Added Successfully!");
}

#[test]
fn other_success_status_stays_on_form() {
    let outcome = SubmitOutcome::from_status(201);
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert!(outcome.is_success());
    assert_eq!(outcome.redirect(), None);
}

#[test]
fn error_status_fails_without_navigation() {
    for status in [400, 401, 404, 500, 302] {
        let outcome = SubmitOutcome::from_status(status);
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(outcome.redirect(), None);
        assert_eq!(outcome.toast_text(), "Something Went Wrong!");
    }
}
