//! Interactive viewer WASM bindings.
//!
//! This module wraps the core viewer state machine for JavaScript hosts and
//! derives the strings the host binds to the DOM: the CSS `transform` and
//! `transition` values for the image element and the percentage label the
//! toolbar displays.

use wasm_bindgen::prelude::*;
use zoomlens_core::{ImageViewer, Measurement, Point};

use crate::config::JsViewerConfig;

/// An interactive image viewer for JavaScript.
///
/// One instance per displayed image. The host forwards layout measurements
/// and input events; the toolbar calls the zoom/rotate/fit commands and
/// renders from the snapshot. All methods are synchronous and none of them
/// throws for runtime viewer state.
#[wasm_bindgen]
pub struct JsImageViewer {
    inner: ImageViewer,
}

#[wasm_bindgen]
impl JsImageViewer {
    /// Create a viewer, optionally with an explicit configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsViewerConfig>) -> JsImageViewer {
        let inner = match config {
            Some(config) => ImageViewer::with_config(config.into_inner()),
            None => ImageViewer::new(),
        };
        JsImageViewer { inner }
    }

    /// Record the container and natural-image dimensions.
    ///
    /// Call once the image has loaded and the container has been laid out,
    /// and again whenever either resizes. The image is scaled to fit and
    /// centered. Unmeasurable dimensions (zero before layout settles) are
    /// dropped; the next layout pass retries.
    pub fn set_layout(
        &mut self,
        container_width: f64,
        container_height: f64,
        image_width: f64,
        image_height: f64,
    ) {
        let container = Measurement::new(container_width, container_height);
        let image = Measurement::new(image_width, image_height);
        if !container.is_measured() || !image.is_measured() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::debug_1(&JsValue::from_str(
                "zoomlens: dropping unmeasured layout, keeping previous transform",
            ));
            return;
        }
        self.inner.set_layout(container, image);
    }

    /// Zoom in by one step, clamped to the configured ceiling.
    pub fn zoom_in(&mut self) {
        self.inner.zoom_in();
    }

    /// Zoom out by one step, clamped to the configured floor.
    pub fn zoom_out(&mut self) {
        self.inner.zoom_out();
    }

    /// Restore the fit scale and clear the pan offset.
    pub fn reset_to_fit(&mut self) {
        self.inner.reset_to_fit();
    }

    /// Set the absolute rotation angle in degrees.
    ///
    /// A stepping toolbar passes `viewer.rotation_angle + 90`.
    pub fn rotate(&mut self, angle_degrees: f64) {
        self.inner.rotate(angle_degrees);
    }

    /// Forward a wheel delta. Negative zooms in, positive zooms out.
    ///
    /// The host's listener must be registered with `{ passive: false }` and
    /// call `preventDefault()` so the page does not scroll underneath.
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.inner.on_wheel(delta_y);
    }

    /// Begin a drag at the given container-space coordinate.
    pub fn on_drag_start(&mut self, x: f64, y: f64) {
        self.inner.on_drag_start(Point::new(x, y));
    }

    /// Continue a drag to the given coordinate.
    pub fn on_drag_move(&mut self, x: f64, y: f64) {
        self.inner.on_drag_move(Point::new(x, y));
    }

    /// End the drag. Forward pointer-up and pointer-leave here.
    pub fn on_drag_end(&mut self) {
        self.inner.on_drag_end();
    }

    /// The current uniform zoom scale
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.matrix().scale()
    }

    /// The current rotation angle in degrees, in [0, 360)
    #[wasm_bindgen(getter)]
    pub fn rotation_angle(&self) -> f64 {
        self.inner.rotation_angle()
    }

    /// The transition duration in seconds for the next style update
    #[wasm_bindgen(getter)]
    pub fn transition_duration(&self) -> f64 {
        self.inner.transition_duration()
    }

    /// Whether a drag is in progress
    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Whether the scaled image overflows its container on some axis
    #[wasm_bindgen(getter)]
    pub fn can_pan(&self) -> bool {
        self.inner.can_pan()
    }

    /// The read-only transform snapshot as `{ matrix, rotation_angle }`.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The CSS `transform` value for the image element.
    ///
    /// `matrix(a, b, c, d, e, f)`, with ` rotate(Ndeg)` appended when the
    /// viewer is rotated.
    pub fn transform_style(&self) -> String {
        let snapshot = self.inner.snapshot();
        let matrix = snapshot.matrix.to_css();
        if snapshot.rotation_angle == 0.0 {
            matrix
        } else {
            format!("{} rotate({}deg)", matrix, snapshot.rotation_angle)
        }
    }

    /// The CSS `transition` value for the image element.
    ///
    /// Empty while a drag is being tracked so the image follows the pointer
    /// without animation lag.
    pub fn transition_style(&self) -> String {
        let duration = self.inner.transition_duration();
        if duration == 0.0 {
            String::new()
        } else {
            format!("transform {}s", duration)
        }
    }

    /// The zoom percentage label the toolbar displays, e.g. `140%`.
    pub fn zoom_percent(&self) -> String {
        format!("{:.0}%", self.inner.matrix().scale() * 100.0)
    }
}
