//! Fit-scale and pan-bound computations.
//!
//! Pure helpers over container and image measurements. The viewer calls
//! these on every layout change and drag step; neither function has side
//! effects or panics.

use crate::Measurement;
use thiserror::Error;

/// Error types for layout-dependent computations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Container or image dimensions are not yet available.
    #[error("container or image not yet measured")]
    Unmeasured,
}

/// Compute the scale that fits the image inside its container.
///
/// Returns 1 when the image already fits on both axes (fit never upscales),
/// otherwise the smaller of the per-axis container/image ratios so the image
/// ends up fully inside the container on both axes. Picking the larger ratio
/// would overflow one axis.
///
/// # Errors
///
/// [`LayoutError::Unmeasured`] when either measurement has a zero, negative,
/// or non-finite extent, or when the ratios themselves come out non-finite
/// or non-positive. The returned scale is always finite and positive.
///
/// # Example
///
/// ```
/// use zoomlens_core::{fit_scale, Measurement};
///
/// let container = Measurement::new(500.0, 1000.0);
/// let image = Measurement::new(1000.0, 1000.0);
/// assert_eq!(fit_scale(container, image), Ok(0.5));
/// ```
pub fn fit_scale(container: Measurement, image: Measurement) -> Result<f64, LayoutError> {
    if !container.is_measured() || !image.is_measured() {
        return Err(LayoutError::Unmeasured);
    }

    let width_scale = container.width / image.width;
    let height_scale = container.height / image.height;

    // Extreme aspect ratios can still overflow to infinity.
    if !width_scale.is_finite()
        || !height_scale.is_finite()
        || width_scale <= 0.0
        || height_scale <= 0.0
    {
        return Err(LayoutError::Unmeasured);
    }

    if width_scale >= 1.0 && height_scale >= 1.0 {
        return Ok(1.0);
    }

    Ok(width_scale.min(height_scale))
}

/// Maximum allowed pan translation on one axis before the container would
/// show empty background.
///
/// The image is centered, so the playable range is half the overflow in each
/// direction. Zero when the scaled image does not overflow the container.
pub fn max_pan_offset(scale: f64, image_extent: f64, container_extent: f64) -> f64 {
    ((scale * image_extent - container_extent) / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_scale_native_fit() {
        // Container at least as large as the image on both axes
        let scale = fit_scale(Measurement::new(1000.0, 1000.0), Measurement::new(800.0, 600.0));
        assert_eq!(scale, Ok(1.0));
    }

    #[test]
    fn test_fit_scale_exact_fit() {
        let scale = fit_scale(Measurement::new(640.0, 480.0), Measurement::new(640.0, 480.0));
        assert_eq!(scale, Ok(1.0));
    }

    #[test]
    fn test_fit_scale_width_constrained() {
        let scale = fit_scale(
            Measurement::new(500.0, 1000.0),
            Measurement::new(1000.0, 1000.0),
        );
        assert_eq!(scale, Ok(0.5));
    }

    #[test]
    fn test_fit_scale_height_constrained() {
        let scale = fit_scale(
            Measurement::new(1000.0, 250.0),
            Measurement::new(1000.0, 1000.0),
        );
        assert_eq!(scale, Ok(0.25));
    }

    #[test]
    fn test_fit_scale_both_overflow() {
        // 2000x1000 image in a 500x500 container: width is the tighter axis
        let scale = fit_scale(
            Measurement::new(500.0, 500.0),
            Measurement::new(2000.0, 1000.0),
        );
        assert_eq!(scale, Ok(0.25));
    }

    #[test]
    fn test_fit_scale_zero_container() {
        let result = fit_scale(Measurement::new(0.0, 0.0), Measurement::new(1000.0, 1000.0));
        assert_eq!(result, Err(LayoutError::Unmeasured));
    }

    #[test]
    fn test_fit_scale_zero_image() {
        let result = fit_scale(Measurement::new(800.0, 600.0), Measurement::new(0.0, 600.0));
        assert_eq!(result, Err(LayoutError::Unmeasured));
    }

    #[test]
    fn test_fit_scale_non_finite_input() {
        let result = fit_scale(
            Measurement::new(f64::NAN, 600.0),
            Measurement::new(800.0, 600.0),
        );
        assert_eq!(result, Err(LayoutError::Unmeasured));

        let result = fit_scale(
            Measurement::new(800.0, 600.0),
            Measurement::new(f64::INFINITY, 600.0),
        );
        assert_eq!(result, Err(LayoutError::Unmeasured));
    }

    #[test]
    fn test_max_pan_offset_no_overflow() {
        // Scaled image smaller than container on this axis
        assert_eq!(max_pan_offset(0.5, 1000.0, 800.0), 0.0);
        assert_eq!(max_pan_offset(1.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn test_max_pan_offset_overflow() {
        // 2x zoom on a 1000px image in an 800px container: 1200px overflow,
        // 600px of play either side of center
        assert_eq!(max_pan_offset(2.0, 1000.0, 800.0), 600.0);
    }

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::Unmeasured;
        assert_eq!(err.to_string(), "container or image not yet measured");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for measured (finite, positive) dimensions.
    fn measurement_strategy() -> impl Strategy<Value = Measurement> {
        (1.0f64..=8000.0, 1.0f64..=8000.0).prop_map(|(w, h)| Measurement::new(w, h))
    }

    proptest! {
        /// Property: the fit scale is always finite and positive.
        #[test]
        fn prop_fit_scale_finite_positive(
            container in measurement_strategy(),
            image in measurement_strategy(),
        ) {
            let scale = fit_scale(container, image).unwrap();
            prop_assert!(scale.is_finite());
            prop_assert!(scale > 0.0);
        }

        /// Property: at the fit scale the image fits the container on both
        /// axes (up to floating-point rounding).
        #[test]
        fn prop_fit_scale_fits_both_axes(
            container in measurement_strategy(),
            image in measurement_strategy(),
        ) {
            let scale = fit_scale(container, image).unwrap();
            prop_assert!(scale * image.width <= container.width * (1.0 + 1e-12));
            prop_assert!(scale * image.height <= container.height * (1.0 + 1e-12));
        }

        /// Property: fit never upscales; a natively fitting image gets
        /// exactly 1.
        #[test]
        fn prop_fit_never_upscales(
            container in measurement_strategy(),
            image in measurement_strategy(),
        ) {
            let scale = fit_scale(container, image).unwrap();
            prop_assert!(scale <= 1.0);
            if image.width <= container.width && image.height <= container.height {
                prop_assert_eq!(scale, 1.0);
            }
        }

        /// Property: the pan bound is never negative.
        #[test]
        fn prop_max_pan_offset_nonnegative(
            scale in 0.01f64..=20.0,
            image_extent in 1.0f64..=8000.0,
            container_extent in 1.0f64..=8000.0,
        ) {
            prop_assert!(max_pan_offset(scale, image_extent, container_extent) >= 0.0);
        }

        /// Property: unmeasured inputs always error instead of producing a
        /// non-finite scale.
        #[test]
        fn prop_unmeasured_inputs_error(
            w in prop_oneof![Just(0.0f64), Just(-1.0), Just(f64::NAN), Just(f64::INFINITY)],
            h in 1.0f64..=8000.0,
            image in measurement_strategy(),
        ) {
            let result = fit_scale(Measurement::new(w, h), image);
            prop_assert_eq!(result, Err(LayoutError::Unmeasured));
        }
    }
}
