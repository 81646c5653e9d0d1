//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `production_form`: The production entry form and its action panel

mod field_renderer;
mod production_form;

pub use production_form::draw as draw_production_form;
