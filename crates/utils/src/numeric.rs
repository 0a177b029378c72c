//! Numpy-style numerical routines for 1-D data

use crate::error::{Error, Result};
use crate::slice_ext::SliceExt;

/// Evenly spaced samples over the closed interval `[start, stop]`
///
/// Matches `numpy.linspace` with `endpoint=True`, so the final sample is
/// exactly `stop` rather than accumulating rounding error.
///
/// ```rust
/// # use flashy_utils::linspace;
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            samples[n - 1] = stop;
            samples
        }
    }
}

/// One-dimensional linear interpolation of `x` on the points (`xp`, `fp`)
///
/// Follows `numpy.interp`:
/// - `xp` must be increasing, although repeated values are allowed
/// - values below `xp[0]` take `fp[0]`, values above `xp[n-1]` take `fp[n-1]`
/// - `NaN` in `x` stays `NaN`
///
/// ```rust
/// # use flashy_utils::interp;
/// let xp = [0.0, 1.0, 4.0];
/// let fp = [0.0, 5.0, 8.0];
///
/// let f = interp(&[-1.0, 0.5, 2.5, 9.0], &xp, &fp).unwrap();
/// assert_eq!(f, vec![0.0, 2.5, 6.5, 8.0]);
/// ```
pub fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Result<Vec<f64>> {
    if xp.len() != fp.len() {
        return Err(Error::UnequalSliceLengths {
            left: xp.len(),
            right: fp.len(),
        });
    }

    // a single point is a constant function
    match fp {
        [] => return Err(Error::SliceContainsNoValues),
        [value] => return Ok(vec![*value; x.len()]),
        _ => (),
    }

    let n = xp.len();
    x.iter()
        .map(|&value| {
            if value.is_nan() {
                Ok(f64::NAN)
            } else if value < xp[0] {
                Ok(fp[0])
            } else if value > xp[n - 1] {
                Ok(fp[n - 1])
            } else {
                let i = xp.find_bin_exclusive(value)?;
                let dx = xp[i + 1] - xp[i];
                if dx == 0.0 {
                    return Ok(fp[i + 1]);
                }
                let slope = (fp[i + 1] - fp[i]) / dx;
                Ok(fp[i] + slope * (value - xp[i]))
            }
        })
        .collect()
}

/// Derivative of `f` with respect to the sample coordinates `x`
///
/// Follows `numpy.gradient(f, x)` with `edge_order=1`. Interior points use
/// the second-order accurate central difference for non-uniform spacing,
/// and the two boundary points use one-sided first differences.
///
/// ```rust
/// # use flashy_utils::gradient;
/// // derivative of x^2 is exact for a quadratic in the interior
/// let x = [0.0, 1.0, 3.0, 4.0];
/// let f: Vec<f64> = x.iter().map(|v| v * v).collect();
///
/// let df = gradient(&f, &x).unwrap();
/// for (value, expected) in df.iter().zip([1.0, 2.0, 6.0, 7.0]) {
///     assert!((value - expected).abs() < 1e-12);
/// }
/// ```
pub fn gradient(f: &[f64], x: &[f64]) -> Result<Vec<f64>> {
    if f.len() != x.len() {
        return Err(Error::UnequalSliceLengths {
            left: f.len(),
            right: x.len(),
        });
    }

    let n = f.len();
    if n < 2 {
        return Err(Error::BelowMinimumSliceLength {
            length: n,
            minimum_required: 2,
        });
    }

    let mut df = Vec::with_capacity(n);
    df.push((f[1] - f[0]) / (x[1] - x[0]));

    for i in 1..n - 1 {
        let h1 = x[i] - x[i - 1];
        let h2 = x[i + 1] - x[i];
        let a = -h2 / (h1 * (h1 + h2));
        let b = (h2 - h1) / (h1 * h2);
        let c = h1 / (h2 * (h1 + h2));
        df.push(a * f[i - 1] + b * f[i] + c * f[i + 1]);
    }

    df.push((f[n - 1] - f[n - 2]) / (x[n - 1] - x[n - 2]));
    Ok(df)
}
