//! Normalized-difference spectral indices.
//!
//! ```text
//! ND(a, b) = (a - b) / (a + b + ε)
//! NDVI     = ND(NIR, RED)
//! ```
//!
//! Numerical notes:
//! - `ε` is added to the denominator unconditionally. For non-negative
//!   reflectances the denominator is therefore never zero, and a pixel where both
//!   bands are zero evaluates to `0 / ε = 0`.
//! - No clamping is applied. Out-of-range reflectances can push the index
//!   slightly outside `[-1, 1]`; callers that care must clamp themselves.
//!
//! Pixels are independent, so the kernel runs in parallel over the flat
//! (column-major) buffers of both inputs.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::domain::SpectralGrid;
use crate::error::GridError;

/// Denominator bias for NDVI.
pub const NDVI_EPSILON: f64 = 1e-6;

/// Per-pixel `(a - b) / (a + b + epsilon)` over two grids of identical shape.
pub fn normalized_difference(
    band_a: &SpectralGrid,
    band_b: &SpectralGrid,
    epsilon: f64,
) -> Result<SpectralGrid, GridError> {
    check_shapes(band_a, band_b)?;

    let shape = band_a.shape();
    let lhs = band_a.as_matrix().as_slice();
    let rhs = band_b.as_matrix().as_slice();

    let data: Vec<f64> = lhs
        .par_iter()
        .zip(rhs.par_iter())
        .map(|(&a, &b)| (a - b) / (a + b + epsilon))
        .collect();

    SpectralGrid::from_matrix(DMatrix::from_vec(shape.height, shape.width, data))
}

/// Normalized Difference Vegetation Index.
///
/// `NDVI = (NIR - RED) / (NIR + RED + 1e-6)`
///
/// Typical values:
/// - dense vegetation: 0.6 to 0.9
/// - sparse vegetation: 0.2 to 0.5
/// - bare soil: 0.1 to 0.2
/// - water/clouds: below 0.0
///
/// # Errors
/// `GridError::InvalidInputShape` if `nir` and `red` differ in shape.
pub fn ndvi(nir: &SpectralGrid, red: &SpectralGrid) -> Result<SpectralGrid, GridError> {
    normalized_difference(nir, red, NDVI_EPSILON)
}

fn check_shapes(a: &SpectralGrid, b: &SpectralGrid) -> Result<(), GridError> {
    if a.shape() != b.shape() {
        return Err(GridError::InvalidInputShape {
            expected: a.shape(),
            actual: b.shape(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GridShape;

    fn grid(rows: &[&[f64]]) -> SpectralGrid {
        let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        SpectralGrid::from_rows(&rows).unwrap()
    }

    #[test]
    fn ndvi_single_pixel() {
        let out = ndvi(&grid(&[&[0.5]]), &grid(&[&[0.25]])).unwrap();
        let expected = (0.5 - 0.25) / (0.5 + 0.25 + 1e-6);
        let v = out.get(0, 0).unwrap();
        assert!((v - expected).abs() < 1e-15);
        assert!((v - 0.3333).abs() < 1e-4, "got {v}");
    }

    #[test]
    fn ndvi_zero_bands_is_zero() {
        let out = ndvi(&grid(&[&[0.0]]), &grid(&[&[0.0]])).unwrap();
        assert_eq!(out.get(0, 0), Some(0.0));
    }

    #[test]
    fn ndvi_preserves_shape_and_pixel_order() {
        let nir = grid(&[&[0.9, 0.8, 0.7], &[0.6, 0.5, 0.0]]);
        let red = grid(&[&[0.1, 0.2, 0.3], &[0.4, 0.5, 0.0]]);
        let out = ndvi(&nir, &red).unwrap();

        assert_eq!(out.shape(), GridShape::new(2, 3));
        for r in 0..2 {
            for c in 0..3 {
                let n = nir.get(r, c).unwrap();
                let d = red.get(r, c).unwrap();
                let expected = (n - d) / (n + d + NDVI_EPSILON);
                assert_eq!(out.get(r, c), Some(expected), "pixel ({r}, {c})");
            }
        }
    }

    #[test]
    fn ndvi_rejects_shape_mismatch() {
        let nir = grid(&[&[0.5, 0.5]]);
        let red = grid(&[&[0.5], &[0.5]]);
        let err = ndvi(&nir, &red).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidInputShape {
                expected: GridShape::new(1, 2),
                actual: GridShape::new(2, 1),
            }
        );
    }

    #[test]
    fn ndvi_stays_within_unit_range_for_unit_inputs() {
        let values = [0.0, 1e-9, 0.1, 0.25, 0.5, 0.75, 1.0];
        let shape = GridShape::new(values.len(), values.len());
        let nir = SpectralGrid::from_fn(shape, |r, _| values[r]).unwrap();
        let red = SpectralGrid::from_fn(shape, |_, c| values[c]).unwrap();

        let out = ndvi(&nir, &red).unwrap();
        let delta = 1e-6;
        for v in out.values() {
            assert!(v.is_finite());
            assert!((-1.0 - delta..=1.0 + delta).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn ndvi_does_not_clamp_out_of_range_inputs() {
        // Negative reflectance (bad calibration) yields |NDVI| > 1; accepted as-is.
        let out = ndvi(&grid(&[&[0.5]]), &grid(&[&[-0.25]])).unwrap();
        assert!(out.get(0, 0).unwrap() > 1.0);
    }

    #[test]
    fn normalized_difference_uses_given_epsilon() {
        let out = normalized_difference(&grid(&[&[1.0]]), &grid(&[&[0.0]]), 1.0).unwrap();
        assert_eq!(out.get(0, 0), Some(0.5));
    }
}
