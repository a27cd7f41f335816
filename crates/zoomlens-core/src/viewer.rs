//! The viewer transform state machine.
//!
//! [`ImageViewer`] owns the affine matrix and rotation angle for one viewer
//! instance and mutates them in response to discrete input events: wheel
//! ticks, pointer drags, toolbar commands, and the measured-layout callback.
//! All mutations are synchronous; the host delivers events one at a time on
//! its UI thread.
//!
//! # States
//!
//! The viewer is either idle or mid-drag. A drag starts only while the
//! scaled image overflows its container ([`ImageViewer::can_pan`]) and ends
//! on pointer release or pointer leave, both forwarded as
//! [`ImageViewer::on_drag_end`]. Zoom and rotation stay available in either
//! state.
//!
//! # Layout
//!
//! Every scale and pan bound depends on the container and natural-image
//! dimensions, which are unknown until the host's first layout pass. Until
//! [`ImageViewer::set_layout`] succeeds, operations that need measurements
//! silently no-op; the host retries naturally on its next render cycle.

use std::cmp::Ordering;

use crate::bounds::{fit_scale, max_pan_offset};
use crate::matrix::AffineMatrix;
use crate::{Measurement, Point, ViewerConfig};

/// Container and natural-image dimensions captured by the last successful
/// layout measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    container: Measurement,
    image: Measurement,
}

/// Read-only transform state for toolbar rendering.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewerSnapshot {
    /// Current transform matrix
    pub matrix: AffineMatrix,
    /// Current rotation in degrees, in [0, 360)
    pub rotation_angle: f64,
}

/// The command surface exposed to toolbar collaborators.
///
/// Toolbars drive the viewer exclusively through these commands and render
/// from the snapshot; no internal mutable state crosses this boundary.
pub trait ViewerCommands {
    /// Zoom in by one step, clamped to the configured ceiling.
    fn zoom_in(&mut self);
    /// Zoom out by one step, clamped to the configured floor.
    fn zoom_out(&mut self);
    /// Restore the fit scale and clear the pan offset.
    fn reset_to_fit(&mut self);
    /// Set the absolute rotation angle in degrees.
    fn rotate(&mut self, angle_degrees: f64);
    /// Read the current transform state.
    fn snapshot(&self) -> ViewerSnapshot;
}

/// Interactive transform controller for a single image in a container.
#[derive(Debug, Clone)]
pub struct ImageViewer {
    config: ViewerConfig,
    matrix: AffineMatrix,
    rotation_angle: f64,
    perfect_scale: f64,
    transition_duration: f64,
    drag_anchor: Option<Point>,
    layout: Option<Layout>,
}

impl ImageViewer {
    /// Create a viewer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ViewerConfig::default())
    }

    /// Create a viewer with an explicit configuration.
    pub fn with_config(config: ViewerConfig) -> Self {
        Self {
            matrix: AffineMatrix::identity(),
            rotation_angle: 0.0,
            perfect_scale: 1.0,
            transition_duration: config.transition_duration,
            drag_anchor: None,
            layout: None,
            config,
        }
    }

    /// Record the measured layout and scale the image to fit its container.
    ///
    /// Invoked by the host once the image's natural dimensions and the
    /// container's client dimensions are both available, and again whenever
    /// either changes. The fit scale is cached for [`Self::reset_to_fit`]
    /// and the matrix is reset to it with no pan offset. Re-invoking with
    /// the same measurements is idempotent.
    ///
    /// Unmeasurable input (zero or non-finite extents) keeps the previous
    /// state; the host's next layout pass retries.
    pub fn set_layout(&mut self, container: Measurement, image: Measurement) {
        let Ok(scale) = fit_scale(container, image) else {
            return;
        };
        self.layout = Some(Layout { container, image });
        self.perfect_scale = scale;
        self.matrix = AffineMatrix::from_scale(scale);
    }

    /// Zoom in by one step, clamped to `max_scale`. A no-op at the ceiling.
    pub fn zoom_in(&mut self) {
        let scale = (self.matrix.scale() + self.config.scale_step).min(self.config.max_scale);
        self.matrix.set_scale(scale);
    }

    /// Zoom out by one step, clamped to `min_scale`.
    ///
    /// The pan offset shrinks with the zoom level: `e`/`f` are scaled by the
    /// new/old scale ratio and re-clamped to the overscan bounds at the new
    /// scale, so the visible window stays roughly centered and never shows
    /// background as the image contracts.
    pub fn zoom_out(&mut self) {
        let old = self.matrix.scale();
        let scale = (old - self.config.scale_step).max(self.config.min_scale);

        let ratio = scale / old;
        if ratio.is_finite() {
            self.matrix
                .set_translation(self.matrix.e * ratio, self.matrix.f * ratio);
        }
        self.matrix.set_scale(scale);
        self.clamp_translation();
    }

    /// Set the absolute rotation angle in degrees, wrapped into [0, 360).
    ///
    /// Stepping ("+90° per click") is the toolbar's business: it calls
    /// `rotate(current + 90)`. Enables the configured transition so the turn
    /// animates.
    pub fn rotate(&mut self, angle_degrees: f64) {
        if !angle_degrees.is_finite() {
            return;
        }
        self.rotation_angle = angle_degrees.rem_euclid(360.0);
        self.transition_duration = self.config.transition_duration;
    }

    /// Restore the fit scale and clear the pan offset.
    ///
    /// Rotation is left alone. A no-op until the layout has been measured.
    pub fn reset_to_fit(&mut self) {
        if self.layout.is_none() {
            return;
        }
        self.matrix = AffineMatrix::from_scale(self.perfect_scale);
    }

    /// Handle a wheel tick forwarded by the host.
    ///
    /// Scroll up (negative delta) zooms in, scroll down zooms out; zero and
    /// NaN deltas are ignored. Non-zero deltas enable the configured
    /// transition for a smooth animated zoom. The host must register its
    /// wheel listener non-passively and suppress the default scroll before
    /// forwarding the delta here.
    pub fn on_wheel(&mut self, delta_y: f64) {
        match delta_y.partial_cmp(&0.0) {
            Some(Ordering::Less) => {
                self.transition_duration = self.config.transition_duration;
                self.zoom_in();
            }
            Some(Ordering::Greater) => {
                self.transition_duration = self.config.transition_duration;
                self.zoom_out();
            }
            _ => {}
        }
    }

    /// Begin a drag at `point`.
    ///
    /// Ignored unless the scaled image overflows the container on some axis.
    /// Disables the transition so the image tracks the pointer without lag.
    pub fn on_drag_start(&mut self, point: Point) {
        if !point.is_finite() || !self.can_pan() {
            return;
        }
        self.drag_anchor = Some(point);
        self.transition_duration = 0.0;
    }

    /// Continue a drag to `point`, clamping the pan to the overscan bounds.
    ///
    /// Ignored unless a drag is in progress and panning is still possible.
    /// The anchor advances to `point` so each move applies an incremental
    /// delta.
    pub fn on_drag_move(&mut self, point: Point) {
        if !point.is_finite() || !self.can_pan() {
            return;
        }
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        let Some(layout) = self.layout else {
            return;
        };

        let bound_x = max_pan_offset(self.matrix.a, layout.image.width, layout.container.width);
        let bound_y = max_pan_offset(self.matrix.d, layout.image.height, layout.container.height);
        self.matrix.set_translation(
            (self.matrix.e + (point.x - anchor.x)).clamp(-bound_x, bound_x),
            (self.matrix.f + (point.y - anchor.y)).clamp(-bound_y, bound_y),
        );
        self.drag_anchor = Some(point);
    }

    /// End the drag. Pointer release and pointer leave both land here.
    pub fn on_drag_end(&mut self) {
        self.drag_anchor = None;
    }

    /// Whether the scaled image overflows the container on at least one
    /// axis. False until the layout has been measured.
    pub fn can_pan(&self) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        self.matrix.a * layout.image.width > layout.container.width
            || self.matrix.d * layout.image.height > layout.container.height
    }

    /// Read the current transform state.
    pub fn snapshot(&self) -> ViewerSnapshot {
        ViewerSnapshot {
            matrix: self.matrix,
            rotation_angle: self.rotation_angle,
        }
    }

    /// The current transform matrix.
    pub fn matrix(&self) -> AffineMatrix {
        self.matrix
    }

    /// The current rotation angle in degrees, in [0, 360).
    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    /// The cached fit scale from the last successful layout measurement.
    pub fn perfect_scale(&self) -> f64 {
        self.perfect_scale
    }

    /// The transition duration in seconds for the next style update. Zero
    /// while a drag is being tracked.
    pub fn transition_duration(&self) -> f64 {
        self.transition_duration
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// The configuration this viewer was constructed with.
    pub fn config(&self) -> ViewerConfig {
        self.config
    }

    /// Re-clamp the pan offset to the overscan bounds at the current scale.
    fn clamp_translation(&mut self) {
        let Some(layout) = self.layout else {
            return;
        };
        let bound_x = max_pan_offset(self.matrix.a, layout.image.width, layout.container.width);
        let bound_y = max_pan_offset(self.matrix.d, layout.image.height, layout.container.height);
        self.matrix.set_translation(
            self.matrix.e.clamp(-bound_x, bound_x),
            self.matrix.f.clamp(-bound_y, bound_y),
        );
    }
}

impl Default for ImageViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerCommands for ImageViewer {
    fn zoom_in(&mut self) {
        ImageViewer::zoom_in(self);
    }

    fn zoom_out(&mut self) {
        ImageViewer::zoom_out(self);
    }

    fn reset_to_fit(&mut self) {
        ImageViewer::reset_to_fit(self);
    }

    fn rotate(&mut self, angle_degrees: f64) {
        ImageViewer::rotate(self, angle_degrees);
    }

    fn snapshot(&self) -> ViewerSnapshot {
        ImageViewer::snapshot(self)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
