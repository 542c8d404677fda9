//! Login and registration feature wiring.
//!
//! # Design
//! - Session mutation happens only after a successful response.
//! - The status endpoint is re-queried after auth to learn the user id.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
