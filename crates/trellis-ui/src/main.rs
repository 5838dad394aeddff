#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Trellis gallery wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() {
    trellis_ui::run_app();
}

/// Shown when the gallery binary is launched outside a browser.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "trellis-ui renders the component gallery in a browser.\n\
    Serve it with `trunk serve` from crates/trellis-ui, or target wasm32-unknown-unknown.";

#[cfg(not(target_arch = "wasm32"))]
fn write_notice(out: &mut impl std::io::Write) -> std::io::Result<()> {
    writeln!(out, "{NATIVE_NOTICE}")
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_notice(&mut std::io::stderr().lock())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn notice_points_at_the_browser_build() -> std::io::Result<()> {
        let mut out = Vec::new();
        write_notice(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("trunk serve"));
        assert!(text.ends_with('\n'));
        Ok(())
    }
}
