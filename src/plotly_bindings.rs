//! Chart drawing entry point.
//!
//! `plotly::bindings` only exists on wasm targets. Native builds (tests,
//! rust-analyzer) get a stub with the same signature.

#[cfg(target_family = "wasm")]
pub use plotly::bindings::react;

#[cfg(not(target_family = "wasm"))]
/// Native stand-in; the dashboard only runs in a browser.
pub async fn react(id: &str, _plot: &plotly::Plot) {
    log::warn!("Cannot draw chart #{id} outside a browser");
}
