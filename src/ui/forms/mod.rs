//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `quote_form`: The quote request form

mod field_renderer;
mod quote_form;

pub use quote_form::draw as draw_quote_form;
