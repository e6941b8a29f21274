//! Add-product form state: field values, touched tracking, and validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The add-product page keeps one `ProductForm` in a signal. Inputs write
//! through `set_field`/`blur`, error text is shown only for touched fields,
//! and `submit` turns the whole form into a `ProductDraft` for the multipart
//! assembler in `net::multipart`.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use std::collections::{BTreeMap, BTreeSet};

use super::attributes::{AttributeError, AttributeField, AttributeList, VariantDraft};
use super::images::{ImageStage, StagedImage};

pub const TITLE_MAX: usize = 150;
pub const DESCRIPTION_MAX: usize = 500;
pub const BRAND_MAX: usize = 30;

/// Scalar fields of the product form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Description,
    Brand,
    Category,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Description, Field::Brand, Field::Category];

    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Brand => "brand",
            Self::Category => "category",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Brand => "Brand",
            Self::Category => "Category",
        }
    }
}

/// A product ready to be packaged and sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub images: Vec<StagedImage>,
    pub attributes: Vec<VariantDraft>,
}

/// Everything that blocked a submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub fields: BTreeMap<Field, String>,
    pub attributes: Vec<AttributeError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.attributes.is_empty()
    }
}

/// Form values plus the interaction state needed to render errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub attributes: AttributeList,
    pub images: ImageStage,
    touched: BTreeSet<Field>,
    attribute_errors: Vec<AttributeError>,
    submit_count: u32,
}

impl ProductForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Brand => &self.brand,
            Field::Category => &self.category,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
            Field::Brand => self.brand = value,
            Field::Category => self.category = value,
        }
    }

    /// Mark a field as touched (on blur).
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Validate scalar fields without touching interaction state.
    pub fn validate(&self) -> BTreeMap<Field, String> {
        Field::ALL
            .into_iter()
            .filter_map(|field| field_error(field, self.value(field)).map(|msg| (field, msg)))
            .collect()
    }

    /// Error text for `field`, only once the user has touched it.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        field_error(field, self.value(field))
    }

    /// Row errors from the last submit, kept current by later row edits.
    pub fn attribute_errors(&self) -> &[AttributeError] {
        &self.attribute_errors
    }

    /// Edit one attribute cell, refreshing row errors after the first submit.
    pub fn set_attribute(&mut self, index: usize, field: AttributeField, value: impl Into<String>) -> bool {
        let changed = self.attributes.set(index, field, value);
        if changed {
            self.refresh_attribute_errors();
        }
        changed
    }

    /// Remove an attribute row and keep row errors aligned with the rows that remain.
    pub fn remove_attribute(&mut self, index: usize) -> bool {
        if !self.attributes.remove(index) {
            return false;
        }
        self.attribute_errors.retain(|e| e.index != index);
        for err in &mut self.attribute_errors {
            if err.index > index {
                err.index -= 1;
            }
        }
        self.refresh_attribute_errors();
        true
    }

    fn refresh_attribute_errors(&mut self) {
        if self.submit_count > 0 {
            self.attribute_errors = self.attributes.validate().err().unwrap_or_default();
        }
    }

    /// Attempt a submit: touch every field, validate everything, and build a draft.
    ///
    /// # Errors
    ///
    /// Returns every field and attribute error when the form is incomplete.
    pub fn submit(&mut self) -> Result<ProductDraft, FormErrors> {
        self.submit_count += 1;
        self.touched.extend(Field::ALL);

        let fields = self.validate();
        let attributes = self.attributes.validate();
        self.attribute_errors = attributes.as_ref().err().cloned().unwrap_or_default();

        match attributes {
            Ok(variants) if fields.is_empty() => Ok(ProductDraft {
                title: self.title.trim().to_owned(),
                description: self.description.clone(),
                brand: self.brand.trim().to_owned(),
                category: self.category.trim().to_owned(),
                images: self.images.images().to_vec(),
                attributes: variants,
            }),
            Ok(_) => Err(FormErrors { fields, attributes: Vec::new() }),
            Err(attributes) => Err(FormErrors { fields, attributes }),
        }
    }

    /// Back to the initial empty form, returning staged images for preview cleanup.
    pub fn reset(&mut self) -> Vec<StagedImage> {
        let images = self.images.clear();
        *self = Self { images: std::mem::take(&mut self.images), ..Self::default() };
        images
    }
}

fn field_error(field: Field, raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Some(format!("{} is Required", field.label()));
    }
    let max = match field {
        Field::Title => TITLE_MAX,
        Field::Description => DESCRIPTION_MAX,
        Field::Brand => BRAND_MAX,
        Field::Category => {
            return value
                .parse::<i64>()
                .is_err()
                .then(|| format!("{} must be a number", field.label()));
        }
    };
    (value.chars().count() > max).then(|| format!("{} must be at most {max} characters", field.label()))
}
