//! Variant attribute rows for the add-product form.
//!
//! DESIGN
//! ======
//! Rows keep the raw text typed into each input so partially edited values
//! survive re-renders. Conversion to typed `VariantDraft`s happens only when
//! the form is submitted.

#[cfg(test)]
#[path = "attributes_test.rs"]
mod attributes_test;

use serde::{Deserialize, Serialize};

pub const QUANTITY_RANGE: (u32, u32) = (1, 100);
pub const PRICE_RANGE: (u32, u32) = (1, 999_999);

/// A validated size/color/price combination, as sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDraft {
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub price: u32,
    #[serde(rename = "buyingPrice")]
    pub buying_price: u32,
}

/// Editable fields of one attribute row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeField {
    Size,
    Color,
    Quantity,
    Price,
    BuyingPrice,
}

impl AttributeField {
    /// Map an input `name` attribute to a field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "size" => Some(Self::Size),
            "color" => Some(Self::Color),
            "quantity" => Some(Self::Quantity),
            "price" => Some(Self::Price),
            "buyingPrice" => Some(Self::BuyingPrice),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Color => "color",
            Self::Quantity => "quantity",
            Self::Price => "price",
            Self::BuyingPrice => "buyingPrice",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Size => "Size",
            Self::Color => "Color",
            Self::Quantity => "Quantity",
            Self::Price => "Price",
            Self::BuyingPrice => "Purchased price",
        }
    }
}

/// Raw input values for one variant row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeRow {
    pub size: String,
    pub color: String,
    pub quantity: String,
    pub price: String,
    pub buying_price: String,
}

impl AttributeRow {
    pub fn get(&self, field: AttributeField) -> &str {
        match field {
            AttributeField::Size => &self.size,
            AttributeField::Color => &self.color,
            AttributeField::Quantity => &self.quantity,
            AttributeField::Price => &self.price,
            AttributeField::BuyingPrice => &self.buying_price,
        }
    }

    fn slot(&mut self, field: AttributeField) -> &mut String {
        match field {
            AttributeField::Size => &mut self.size,
            AttributeField::Color => &mut self.color,
            AttributeField::Quantity => &mut self.quantity,
            AttributeField::Price => &mut self.price,
            AttributeField::BuyingPrice => &mut self.buying_price,
        }
    }

    /// Convert the raw row into a typed variant, collecting every field error.
    ///
    /// # Errors
    ///
    /// Returns the failing fields with a human-readable message each.
    pub fn to_variant(&self) -> Result<VariantDraft, Vec<(AttributeField, String)>> {
        let mut errors = Vec::new();

        let size = required_text(AttributeField::Size, &self.size, &mut errors);
        let color = required_text(AttributeField::Color, &self.color, &mut errors);
        let quantity = ranged_number(AttributeField::Quantity, &self.quantity, QUANTITY_RANGE, &mut errors);
        let price = ranged_number(AttributeField::Price, &self.price, PRICE_RANGE, &mut errors);
        let buying_price = ranged_number(AttributeField::BuyingPrice, &self.buying_price, PRICE_RANGE, &mut errors);

        match (size, color, quantity, price, buying_price) {
            (Some(size), Some(color), Some(quantity), Some(price), Some(buying_price)) if errors.is_empty() => {
                Ok(VariantDraft { size, color, quantity, price, buying_price })
            }
            _ => Err(errors),
        }
    }
}

fn required_text(field: AttributeField, raw: &str, errors: &mut Vec<(AttributeField, String)>) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        errors.push((field, format!("{} is Required", field.label())));
        return None;
    }
    Some(value.to_owned())
}

fn ranged_number(
    field: AttributeField,
    raw: &str,
    (min, max): (u32, u32),
    errors: &mut Vec<(AttributeField, String)>,
) -> Option<u32> {
    let value = raw.trim();
    if value.is_empty() {
        errors.push((field, format!("{} is Required", field.label())));
        return None;
    }
    match value.parse::<u32>() {
        Ok(n) if (min..=max).contains(&n) => Some(n),
        _ => {
            errors.push((field, format!("{} must be between {min} and {max}", field.label())));
            None
        }
    }
}

/// An error attached to a single field of a single row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeError {
    pub index: usize,
    pub field: AttributeField,
    pub message: String,
}

/// Ordered, never-empty list of variant rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeList {
    rows: Vec<AttributeRow>,
}

impl Default for AttributeList {
    fn default() -> Self {
        Self { rows: vec![AttributeRow::default()] }
    }
}

impl AttributeList {
    pub fn rows(&self) -> &[AttributeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append an empty row.
    pub fn add(&mut self) {
        self.rows.push(AttributeRow::default());
    }

    /// Remove the row at `index`. The first row is never removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if !is_removable(index) || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Update one field of one row; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, field: AttributeField, value: impl Into<String>) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };
        *row.slot(field) = value.into();
        true
    }

    /// Convert every row, or return all row errors in row order.
    ///
    /// # Errors
    ///
    /// Returns one `AttributeError` per failing field across all rows.
    pub fn validate(&self) -> Result<Vec<VariantDraft>, Vec<AttributeError>> {
        let mut variants = Vec::with_capacity(self.rows.len());
        let mut errors = Vec::new();
        for (index, row) in self.rows.iter().enumerate() {
            match row.to_variant() {
                Ok(variant) => variants.push(variant),
                Err(row_errors) => errors.extend(
                    row_errors
                        .into_iter()
                        .map(|(field, message)| AttributeError { index, field, message }),
                ),
            }
        }
        if errors.is_empty() { Ok(variants) } else { Err(errors) }
    }
}

/// Whether the row at `index` may show a remove button.
pub fn is_removable(index: usize) -> bool {
    index != 0
}
