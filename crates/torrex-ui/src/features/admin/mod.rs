//! Admin statistics and moderation feature wiring.
//!
//! # Design
//! - Statistics load when the admin page opens, never in the background.
//! - Destructive actions always go through a confirmation dialog.
//! - Restrict API calls to this feature layer to honor UI boundaries.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
