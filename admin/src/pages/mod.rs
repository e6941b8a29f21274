//! Routed screens.
//!
//! ARCHITECTURE
//! ============
//! `add_product` is the only page. It wires form state to the catalog API
//! and leaves field rendering to `components`.

pub mod add_product;
