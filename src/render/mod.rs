//! Renderers over the document model.
//!
//! Both renderers are pure functions from a [`crate::doc::Document`] to a
//! `String`; they own layout and styling only, never domain logic, and an
//! empty document renders to an empty string in both targets.

pub mod term;
pub mod web;

pub use term::{render_terminal, StyleMap};
pub use web::render_web;
