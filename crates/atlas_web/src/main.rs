//! Trunk binary for the country browser.
//!
//! Only a `wasm32` build with `--features web` mounts anything; a host build
//! produces an empty binary so `cargo build --workspace` stays green.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    atlas_web::start();
}
