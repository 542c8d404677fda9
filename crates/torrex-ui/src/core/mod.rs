//! Core, DOM-free primitives and helpers for the Web UI.
pub mod char_count;
pub mod format;
pub mod requests;
pub mod router;
pub mod session;
pub mod store;
pub mod validation;
