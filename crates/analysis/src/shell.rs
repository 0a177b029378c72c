//! Mass of spherical shells

// crate modules
use crate::error::{Error, Result};

// standard library
use std::f64::consts::PI;

// external crates
use itertools::izip;

/// Mass of one spherical shell
///
/// `r` is the mid-cell radius, `dr` the shell width and `dens` the mean
/// density. The volume is exact rather than the `4πr²dr` approximation.
///
/// ```rust
/// # use flashy_analysis::shell_mass;
/// // a zero width shell has no mass
/// assert_eq!(shell_mass(1.0, 0.0, 1.0), 0.0);
///
/// // a full unit sphere of unit density
/// let m = shell_mass(0.5, 1.0, 1.0);
/// assert!((m - 4.0 / 3.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn shell_mass(r: f64, dr: f64, dens: f64) -> f64 {
    let outer = r + 0.5 * dr;
    let inner = r - 0.5 * dr;
    4.0 / 3.0 * PI * (outer.powi(3) - inner.powi(3)) * dens
}

/// Mass of every shell, element by element
///
/// All three slices must be the same length.
pub fn calculate_shell_mass(r: &[f64], dr: &[f64], dens: &[f64]) -> Result<Vec<f64>> {
    for found in [dr.len(), dens.len()] {
        if found != r.len() {
            return Err(Error::UnexpectedLength {
                expected: r.len(),
                found,
            });
        }
    }

    Ok(izip!(r, dr, dens)
        .map(|(r, dr, dens)| shell_mass(*r, *dr, *dens))
        .collect())
}
