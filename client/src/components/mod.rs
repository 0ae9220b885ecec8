//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and the trip settings form. Pages in
//! `crate::pages` compose them per route.

pub mod brand;
pub mod header;
pub mod settings_form;
