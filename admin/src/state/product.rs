//! Create-product request lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tracks the single in-flight submission so the page can disable the submit
//! button, and maps the backend status code onto what the UI does next.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use crate::config::PRODUCT_LIST_ROUTE;

pub const CREATED_MESSAGE: &str = "Product Added Successfully!";
pub const FAILED_MESSAGE: &str = "Something Went Wrong!";

/// Status of the most recent create-product request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductState {
    pub is_loading: bool,
    pub is_success: bool,
    pub is_error: bool,
    pub created_product: Option<serde_json::Value>,
    pub message: Option<String>,
}

impl ProductState {
    /// Start a request. Returns `false` if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        *self = Self { is_loading: true, ..Self::default() };
        true
    }

    pub fn succeed(&mut self, body: Option<serde_json::Value>) {
        self.is_loading = false;
        self.is_success = true;
        self.is_error = false;
        self.created_product = body;
        self.message = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.is_success = false;
        self.is_error = true;
        self.created_product = None;
        self.message = Some(message.into());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What the page does once the backend answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Status 200: show success and leave for the product list.
    Created,
    /// Other 2xx: show success, stay on the form.
    Accepted,
    /// Anything else.
    Failed,
}

impl SubmitOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => Self::Created,
            201..=299 => Self::Accepted,
            _ => Self::Failed,
        }
    }

    /// Route to navigate to, if any.
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::Created => Some(PRODUCT_LIST_ROUTE),
            Self::Accepted | Self::Failed => None,
        }
    }

    pub fn is_success(self) -> bool {
        !matches!(self, Self::Failed)
    }

    pub fn toast_text(self) -> &'static str {
        if self.is_success() { CREATED_MESSAGE } else { FAILED_MESSAGE }
    }
}
