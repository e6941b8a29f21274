use super::*;
use crate::state::attributes::AttributeField;
use crate::state::toast::ToastKind;

fn response(status: u16) -> Result<CreateProductResponse, String> {
    Ok(CreateProductResponse { status, body: Some(serde_json::json!({ "id": 1 })) })
}

// =============================================================
// apply_submission
// =============================================================

#[test]
fn status_200_navigates_to_list_and_toasts_success() {
    let mut product = ProductState::default();
    let mut toasts = ToastState::default();
    product.begin();

    let redirect = apply_submission(response(200), &mut product, &mut toasts);

    assert_eq!(redirect, Some("/admin/list-product"));
    assert!(product.is_success);
    assert!(!product.is_loading);
    assert_eq!(product.created_product, Some(serde_json::json!({ "id": 1 })));
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].kind, ToastKind::Success);
    assert_eq!(toasts.items[0].text, "Product Added Successfully!");
}

#[test]
fn status_201_toasts_success_without_navigation() {
    let mut product = ProductState::default();
    let mut toasts = ToastState::default();

    let redirect = apply_submission(response(201), &mut product, &mut toasts);

    assert_eq!(redirect, None);
    assert!(product.is_success);
    assert_eq!(toasts.items[0].kind, ToastKind::Success);
}

#[test]
fn error_status_shows_generic_error() {
    let mut product = ProductState::default();
    let mut toasts = ToastState::default();

    let redirect = apply_submission(response(500), &mut product, &mut toasts);

    assert_eq!(redirect, None);
    assert!(product.is_error);
    assert_eq!(product.message.as_deref(), Some("create product failed: 500"));
    assert_eq!(toasts.items[0].kind, ToastKind::Error);
    assert_eq!(toasts.items[0].text, "Something Went Wrong!");
}

#[test]
fn transport_failure_shows_generic_error() {
    let mut product = ProductState::default();
    let mut toasts = ToastState::default();

    let redirect = apply_submission(Err("network down".to_owned()), &mut product, &mut toasts);

    assert_eq!(redirect, None);
    assert!(product.is_error);
    assert_eq!(product.message.as_deref(), Some("network down"));
    assert_eq!(toasts.items[0].text, "Something Went Wrong!");
}

// =============================================================
// prepare_submission
// =============================================================

#[test]
fn prepare_submission_rejects_empty_title() {
    let mut form = ProductForm::default();
    assert!(prepare_submission(&mut form).is_none());
    assert!(form.is_touched(Field::Title));
}

#[test]
fn prepare_submission_packages_complete_form() {
    let mut form = ProductForm::default();
    form.set_field(Field::Title, "Wool scarf");
    form.set_field(Field::Description, "Warm");
    form.set_field(Field::Brand, "Fjell");
    form.set_field(Field::Category, "2");
    for (field, value) in [
        (AttributeField::Size, "1"),
        (AttributeField::Color, "#aa0000"),
        (AttributeField::Quantity, "4"),
        (AttributeField::Price, "300"),
        (AttributeField::BuyingPrice, "120"),
    ] {
        form.attributes.set(0, field, value);
    }

    let payload = prepare_submission(&mut form)
        .expect("form is complete")
        .expect("payload encodes");
    assert_eq!(payload.text("title"), Some("Wool scarf"));
    assert_eq!(payload.parts.last().map(|p| p.name), Some("attributes"));
}
