//! Torrent search feature wiring.
//!
//! # Design
//! - Keep search form, results, and card actions in one feature slice.
//! - Restrict API calls to this feature layer to honor UI boundaries.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
