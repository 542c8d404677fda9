//! Transport layer: HTTP client and response decoding.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod response;
