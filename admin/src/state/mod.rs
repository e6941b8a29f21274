//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (form values, attribute rows, staged images,
//! reference lists, request lifecycle, notifications) so components can
//! depend on small focused models. Each model is plain data; pages wrap them
//! in `RwSignal`s and provide them via context.

pub mod attributes;
pub mod catalog;
pub mod images;
pub mod product;
pub mod product_form;
pub mod toast;
