//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is the view bound to one `AppRoute` and delegates rendering
//! details to `components`.

pub mod home;
pub mod login;
