//! 2D affine transform matrix for viewer rendering.
//!
//! The matrix is represented as:
//! ```text
//! | a c e |
//! | b d f |
//! | 0 0 1 |
//! ```
//!
//! In this viewer `a`/`d` carry the uniform zoom scale and `e`/`f` the pan
//! translation. `b` and `c` stay 0; rotation is tracked separately as an
//! angle so the host can compose `matrix(…)` and `rotate(…)` in its style
//! binding.

/// A 2D affine transformation matrix in CSS/DOM component order.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AffineMatrix {
    /// Scale X component.
    pub a: f64,
    /// Skew Y component.
    pub b: f64,
    /// Skew X component.
    pub c: f64,
    /// Scale Y component.
    pub d: f64,
    /// Translate X component.
    pub e: f64,
    /// Translate Y component.
    pub f: f64,
}

impl AffineMatrix {
    /// Create a new matrix from its six components.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Create an identity matrix.
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a uniform scale matrix with no translation.
    pub fn from_scale(scale: f64) -> Self {
        Self {
            a: scale,
            d: scale,
            ..Self::identity()
        }
    }

    /// The uniform scale factor.
    ///
    /// `a` and `d` are kept equal by every viewer operation, so either one
    /// is the zoom level.
    pub fn scale(&self) -> f64 {
        self.a
    }

    /// Set the uniform scale factor on both axes.
    pub fn set_scale(&mut self, scale: f64) {
        self.a = scale;
        self.d = scale;
    }

    /// Set the translation components.
    pub fn set_translation(&mut self, e: f64, f: f64) {
        self.e = e;
        self.f = f;
    }

    /// Render as a CSS `matrix(a, b, c, d, e, f)` function, suitable for an
    /// element's `transform` property.
    pub fn to_css(&self) -> String {
        format!(
            "matrix({}, {}, {}, {}, {}, {})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let m = AffineMatrix::identity();
        assert_eq!(m.a, 1.0);
        assert_eq!(m.b, 0.0);
        assert_eq!(m.c, 0.0);
        assert_eq!(m.d, 1.0);
        assert_eq!(m.e, 0.0);
        assert_eq!(m.f, 0.0);
    }

    #[test]
    fn test_from_scale() {
        let m = AffineMatrix::from_scale(0.5);
        assert_eq!(m.a, 0.5);
        assert_eq!(m.d, 0.5);
        assert_eq!(m.e, 0.0);
        assert_eq!(m.f, 0.0);
    }

    #[test]
    fn test_set_scale_keeps_axes_equal() {
        let mut m = AffineMatrix::identity();
        m.set_scale(2.3);
        assert_eq!(m.a, m.d);
        assert_eq!(m.scale(), 2.3);
    }

    #[test]
    fn test_set_translation() {
        let mut m = AffineMatrix::identity();
        m.set_translation(12.0, -7.5);
        assert_eq!(m.e, 12.0);
        assert_eq!(m.f, -7.5);
        // Scale untouched
        assert_eq!(m.a, 1.0);
        assert_eq!(m.d, 1.0);
    }

    #[test]
    fn test_to_css_identity() {
        let m = AffineMatrix::identity();
        assert_eq!(m.to_css(), "matrix(1, 0, 0, 1, 0, 0)");
    }

    #[test]
    fn test_to_css_scaled_and_panned() {
        let mut m = AffineMatrix::from_scale(1.5);
        m.set_translation(10.0, -20.5);
        assert_eq!(m.to_css(), "matrix(1.5, 0, 0, 1.5, 10, -20.5)");
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(AffineMatrix::default(), AffineMatrix::identity());
    }
}
