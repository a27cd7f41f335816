//! Zoomlens WASM - WebAssembly bindings for Zoomlens
//!
//! This crate exposes the zoomlens-core viewer engine to JavaScript/TypeScript
//! hosts. The host owns the DOM: it renders the image, registers the raw
//! wheel and pointer listeners (the wheel listener non-passively, calling
//! `preventDefault()` before forwarding), and assigns the style strings this
//! crate produces. The toolbar collaborator reads the snapshot and calls the
//! commands; it has no transform logic of its own.
//!
//! # Module Structure
//!
//! - `config` - Viewer configuration wrapper with JSON (de)serialization
//! - `viewer` - The interactive viewer wrapper and its style/label helpers
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImageViewer } from '@zoomlens/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const viewer = new JsImageViewer();
//!
//! img.onload = () => {
//!   viewer.set_layout(container.clientWidth, container.clientHeight,
//!                     img.naturalWidth, img.naturalHeight);
//!   img.style.transform = viewer.transform_style();
//! };
//!
//! container.addEventListener('wheel', (e) => {
//!   e.preventDefault();
//!   viewer.on_wheel(e.deltaY);
//!   img.style.transform = viewer.transform_style();
//!   img.style.transition = viewer.transition_style();
//! }, { passive: false });
//! ```

use wasm_bindgen::prelude::*;

mod config;
mod viewer;

// Re-export public types
pub use config::JsViewerConfig;
pub use viewer::JsImageViewer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
