//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain Rust values; components wrap them in signals. This
//! keeps parsing and validation testable without a reactive runtime.

pub mod settings;
