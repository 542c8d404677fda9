#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
//! Torrex browser entry point.
//!
//! Outside wasm the binary only tells the operator how to serve the bundle.

#[cfg(target_arch = "wasm32")]
fn main() {
    torrex_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const SERVE_HINT: &str = "torrex-ui renders in the browser: run `trunk serve` in crates/torrex-ui \
and open the printed address (set `torrex.api_base` in local storage to target another backend).";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    print_hint(&mut std::io::stderr().lock())
}

#[cfg(not(target_arch = "wasm32"))]
fn print_hint(out: &mut impl std::io::Write) -> std::io::Result<()> {
    writeln!(out, "{SERVE_HINT}")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn hint_names_the_dev_server_and_backend_override() -> std::io::Result<()> {
        let mut out = Vec::new();
        print_hint(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("trunk serve"));
        assert!(text.contains("torrex.api_base"));
        assert!(text.ends_with('\n'));
        Ok(())
    }
}
