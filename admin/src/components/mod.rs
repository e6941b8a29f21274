//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form inputs and feedback surfaces; the add-product page
//! owns the state signals and passes them down or provides them via context.

pub mod attribute_row;
pub mod custom_input;
pub mod description_editor;
pub mod image_dropzone;
pub mod toast_stack;
