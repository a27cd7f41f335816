//! Zoomlens Core - Viewer transform engine
//!
//! This crate provides the core transform logic for Zoomlens: the affine
//! zoom/pan/rotate state machine, fit-to-container scaling, and the snapshot
//! and command surface consumed by toolbar renderers.

pub mod bounds;
pub mod matrix;
pub mod viewer;

pub use bounds::{fit_scale, max_pan_offset, LayoutError};
pub use matrix::AffineMatrix;
pub use viewer::{ImageViewer, ViewerCommands, ViewerSnapshot};

fn default_max_scale() -> f64 {
    9.9
}

fn default_min_scale() -> f64 {
    0.1
}

fn default_scale_step() -> f64 {
    0.1
}

fn default_transition_duration() -> f64 {
    0.3
}

/// Viewer configuration, fixed for the lifetime of an [`ImageViewer`].
///
/// Missing fields deserialize to their defaults, so hosts can pass a partial
/// configuration object and override only what they need.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewerConfig {
    /// Upper bound for the uniform zoom scale
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
    /// Lower bound for the uniform zoom scale
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    /// Scale change applied per zoom step
    #[serde(default = "default_scale_step")]
    pub scale_step: f64,
    /// Transition duration in seconds for animated zoom and rotation
    #[serde(default = "default_transition_duration")]
    pub transition_duration: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_scale: default_max_scale(),
            min_scale: default_min_scale(),
            scale_step: default_scale_step(),
            transition_duration: default_transition_duration(),
        }
    }
}

impl ViewerConfig {
    /// Create a configuration with the default limits
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pixel dimensions of the container or the natural image.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measurement {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Measurement {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check that both extents are finite and strictly positive.
    ///
    /// Elements report zero dimensions before layout has run; such a
    /// measurement is not usable for any scale computation.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A pointer coordinate in container space.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
