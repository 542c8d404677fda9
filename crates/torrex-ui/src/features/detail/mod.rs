//! Torrent detail feature wiring.
//!
//! # Design
//! - The viewed record is always re-fetched before display.
//! - A detail response is applied only while its request token is current.

pub mod actions;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
