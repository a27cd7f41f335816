//! Viewer configuration WASM bindings.
//!
//! This module provides JavaScript bindings for the viewer configuration,
//! allowing zoom limits and transition timing to be set from TypeScript.

use wasm_bindgen::prelude::*;
use zoomlens_core::ViewerConfig;

/// Viewer configuration wrapper for JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsViewerConfig {
    inner: ViewerConfig,
}

#[wasm_bindgen]
impl JsViewerConfig {
    /// Create a new configuration with default limits
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: ViewerConfig::default(),
        }
    }

    /// Get the upper zoom bound
    #[wasm_bindgen(getter)]
    pub fn max_scale(&self) -> f64 {
        self.inner.max_scale
    }

    /// Set the upper zoom bound
    #[wasm_bindgen(setter)]
    pub fn set_max_scale(&mut self, value: f64) {
        self.inner.max_scale = value;
    }

    /// Get the lower zoom bound
    #[wasm_bindgen(getter)]
    pub fn min_scale(&self) -> f64 {
        self.inner.min_scale
    }

    /// Set the lower zoom bound
    #[wasm_bindgen(setter)]
    pub fn set_min_scale(&mut self, value: f64) {
        self.inner.min_scale = value;
    }

    /// Get the scale change per zoom step
    #[wasm_bindgen(getter)]
    pub fn scale_step(&self) -> f64 {
        self.inner.scale_step
    }

    /// Set the scale change per zoom step
    #[wasm_bindgen(setter)]
    pub fn set_scale_step(&mut self, value: f64) {
        self.inner.scale_step = value;
    }

    /// Get the transition duration in seconds
    #[wasm_bindgen(getter)]
    pub fn transition_duration(&self) -> f64 {
        self.inner.transition_duration
    }

    /// Set the transition duration in seconds
    #[wasm_bindgen(setter)]
    pub fn set_transition_duration(&mut self, value: f64) {
        self.inner.transition_duration = value;
    }

    /// Serialize to a plain JSON object
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain JSON object.
    ///
    /// Missing fields fall back to their defaults, so hosts can pass partial
    /// objects such as `{ maxScale: 4 }` written with the Rust field names
    /// (`{ max_scale: 4 }`).
    pub fn from_json(value: JsValue) -> Result<JsViewerConfig, JsValue> {
        let inner: ViewerConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid viewer config: {}", e)))?;
        Ok(Self { inner })
    }
}

impl Default for JsViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl JsViewerConfig {
    /// Unwrap to the core configuration for viewer construction.
    pub(crate) fn into_inner(self) -> ViewerConfig {
        self.inner
    }
}
