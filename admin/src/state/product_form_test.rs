use super::*;
use crate::state::attributes::AttributeField;
use crate::state::images::NewImage;

fn complete_form() -> ProductForm {
    let mut form = ProductForm::default();
    form.set_field(Field::Title, "Linen shirt");
    form.set_field(Field::Description, "<p>Breathable summer linen.</p>");
    form.set_field(Field::Brand, "Northwind");
    form.set_field(Field::Category, "4");
    form.attributes.set(0, AttributeField::Size, "2");
    form.attributes.set(0, AttributeField::Color, "#112233");
    form.attributes.set(0, AttributeField::Quantity, "5");
    form.attributes.set(0, AttributeField::Price, "4900");
    form.attributes.set(0, AttributeField::BuyingPrice, "3100");
    form
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_with_empty_title_is_rejected() {
    let mut form = complete_form();
    form.set_field(Field::Title, "");

    let errors = form.submit().expect_err("empty title must be rejected");
    assert_eq!(errors.fields.get(&Field::Title).map(String::as_str), Some("Title is Required"));
    assert_eq!(errors.fields.len(), 1);
}

#[test]
fn submit_with_whitespace_brand_is_rejected() {
    let mut form = complete_form();
    form.set_field(Field::Brand, "   ");
    let errors = form.submit().expect_err("blank brand must be rejected");
    assert!(errors.fields.contains_key(&Field::Brand));
}

#[test]
fn submit_without_category_is_rejected() {
    let mut form = complete_form();
    form.set_field(Field::Category, "");
    let errors = form.submit().expect_err("category is required");
    assert_eq!(errors.fields.get(&Field::Category).map(String::as_str), Some("Category is Required"));
}

#[test]
fn submit_with_non_numeric_category_is_rejected() {
    let mut form = complete_form();
    form.set_field(Field::Category, "shirts");
    let errors = form.submit().expect_err("category must be numeric");
    assert_eq!(
        errors.fields.get(&Field::Category).map(String::as_str),
        Some("Category must be a number")
    );
}

#[test]
fn submit_complete_form_builds_draft() {
    let mut form = complete_form();
    form.images.stage(vec![NewImage {
        file_name: "shirt.jpg".to_owned(),
        mime_type: "image/jpeg".to_owned(),
        bytes: vec![1, 2, 3],
        preview_url: None,
    }]);

    let draft = form.submit().expect("form is complete");
    assert_eq!(draft.title, "Linen shirt");
    assert_eq!(draft.brand, "Northwind");
    assert_eq!(draft.category, "4");
    assert_eq!(draft.images.len(), 1);
    assert_eq!(draft.attributes.len(), 1);
    assert_eq!(draft.attributes[0].quantity, 5);
    assert_eq!(form.submit_count(), 1);
}

#[test]
fn submit_reports_incomplete_attribute_rows() {
    let mut form = complete_form();
    form.attributes.add();

    let errors = form.submit().expect_err("second row is empty");
    assert!(errors.fields.is_empty());
    assert!(!errors.attributes.is_empty());
    assert!(errors.attributes.iter().all(|e| e.index == 1));
    assert_eq!(form.attribute_errors(), errors.attributes.as_slice());
}

#[test]
fn successful_submit_clears_previous_attribute_errors() {
    let mut form = complete_form();
    form.attributes.add();
    assert!(form.submit().is_err());
    assert!(form.attributes.remove(1));
    assert!(form.submit().is_ok());
    assert!(form.attribute_errors().is_empty());
}

fn fill_row(form: &mut ProductForm, index: usize) {
    form.set_attribute(index, AttributeField::Size, "3");
    form.set_attribute(index, AttributeField::Color, "#445566");
    form.set_attribute(index, AttributeField::Quantity, "7");
    form.set_attribute(index, AttributeField::Price, "2500");
    form.set_attribute(index, AttributeField::BuyingPrice, "1800");
}

#[test]
fn removing_invalid_row_does_not_shift_its_errors_onto_next_row() {
    let mut form = complete_form();
    form.attributes.add();
    form.attributes.add();
    fill_row(&mut form, 2);
    assert!(form.submit().is_err());
    assert!(form.attribute_errors().iter().all(|e| e.index == 1));

    assert!(form.remove_attribute(1));
    assert_eq!(form.attributes.len(), 2);
    assert!(form.attributes.rows()[1].to_variant().is_ok());
    assert!(form.attribute_errors().is_empty());
}

#[test]
fn removing_earlier_row_reindexes_later_errors() {
    let mut form = complete_form();
    form.attributes.add();
    fill_row(&mut form, 1);
    form.attributes.add();
    assert!(form.submit().is_err());
    assert!(form.attribute_errors().iter().all(|e| e.index == 2));

    assert!(form.remove_attribute(1));
    assert!(!form.attribute_errors().is_empty());
    assert!(form.attribute_errors().iter().all(|e| e.index == 1));
}

#[test]
fn editing_row_after_submit_clears_fixed_errors() {
    let mut form = complete_form();
    form.attributes.add();
    assert!(form.submit().is_err());
    assert!(!form.attribute_errors().is_empty());

    fill_row(&mut form, 1);
    assert!(form.attribute_errors().is_empty());
}

#[test]
fn editing_row_before_submit_records_no_errors() {
    let mut form = ProductForm::default();
    form.set_attribute(0, AttributeField::Quantity, "0");
    assert!(form.attribute_errors().is_empty());
}

#[test]
fn remove_attribute_rejects_first_row() {
    let mut form = complete_form();
    assert!(!form.remove_attribute(0));
    assert_eq!(form.attributes.len(), 1);
}

// =============================================================
// Touched / visible errors
// =============================================================

#[test]
fn errors_hidden_until_field_touched() {
    let mut form = ProductForm::default();
    assert_eq!(form.visible_error(Field::Title), None);
    form.blur(Field::Title);
    assert_eq!(form.visible_error(Field::Title).as_deref(), Some("Title is Required"));
    assert_eq!(form.visible_error(Field::Brand), None);
}

#[test]
fn submit_touches_every_field() {
    let mut form = ProductForm::default();
    let _ = form.submit();
    for field in Field::ALL {
        assert!(form.is_touched(field), "{} should be touched", field.name());
    }
}

#[test]
fn validate_does_not_touch_fields() {
    let form = ProductForm::default();
    assert_eq!(form.validate().len(), 4);
    assert!(!form.is_touched(Field::Title));
}

// =============================================================
// Length limits
// =============================================================

#[test]
fn title_longer_than_limit_is_rejected() {
    let mut form = complete_form();
    form.set_field(Field::Title, "a".repeat(TITLE_MAX + 1));
    let errors = form.validate();
    assert_eq!(
        errors.get(&Field::Title).map(String::as_str),
        Some("Title must be at most 150 characters")
    );
}

#[test]
fn limits_count_characters_not_bytes() {
    let mut form = complete_form();
    form.set_field(Field::Brand, "é".repeat(BRAND_MAX));
    assert!(form.validate().is_empty());
}

#[test]
fn description_at_limit_is_accepted() {
    let mut form = complete_form();
    form.set_field(Field::Description, "d".repeat(DESCRIPTION_MAX));
    assert!(form.validate().is_empty());
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_returns_to_initial_state() {
    let mut form = complete_form();
    form.attributes.add();
    form.images.stage(vec![NewImage {
        file_name: "a.png".to_owned(),
        mime_type: "image/png".to_owned(),
        bytes: vec![0],
        preview_url: None,
    }]);
    form.blur(Field::Title);

    let released = form.reset();
    assert_eq!(released.len(), 1);
    assert!(form.title.is_empty());
    assert_eq!(form.attributes.len(), 1);
    assert!(form.images.is_empty());
    assert!(!form.is_touched(Field::Title));
    assert_eq!(form.submit_count(), 0);
}
