//! Feature slices: state, pure logic, actions, and wasm views per page.

pub mod admin;
pub mod auth;
pub mod detail;
pub mod search;
pub mod upload;
