#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    dead_code,
    unused,
    unreachable_pub,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Torrex web UI.
//! This crate holds the Yew front-end entrypoint plus the platform-neutral page,
//! session, and form logic it renders.

pub mod core;
pub mod features;
pub mod i18n;
pub mod models;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::router::{Page, PageKind};
    use crate::core::store::{AppStore, navigate_to};
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn translation_fallbacks_work() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("nav.brand", "Brand"), "Torrex");
        assert_eq!(bundle.text("nav.missing_key", "Default"), "Default");
    }

    #[test]
    fn fresh_store_shows_only_home() {
        let mut store = AppStore::default();
        assert!(store.router.is_visible(PageKind::Home));
        navigate_to(&mut store, Page::Admin);
        assert_eq!(store.router.current(), &Page::Home);
    }
}
