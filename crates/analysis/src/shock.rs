//! Shock trajectory and velocity

// crate modules
use crate::error::{Error, Result};

// flashy modules
use flashy_utils::{gradient, interp, linspace, SliceExt};

// external crates
use itertools::Itertools;
use log::{debug, trace};

/// Number of evenly spaced samples used by [calculate_shock]
pub const SHOCK_SAMPLES: usize = 1000;

/// Resampled shock trajectory
///
/// The three vectors always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Shock {
    /// Evenly spaced sample times
    pub time: Vec<f64>,
    /// Shock radius interpolated at each time
    pub radius: Vec<f64>,
    /// Rate of change of the radius
    pub velocity: Vec<f64>,
}

/// Collapse repeated shock radii to single points
///
/// Each run of consecutive equal radii becomes one point at the time of its
/// last occurrence, and the trajectory always starts from `(0, 0)`.
///
/// ```rust
/// # use flashy_analysis::deduplicate_shock;
/// let time = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let radius = [5.0, 5.0, 7.0, 7.0, 7.0];
///
/// let (t, r) = deduplicate_shock(&time, &radius).unwrap();
/// assert_eq!(t, vec![0.0, 1.0, 4.0]);
/// assert_eq!(r, vec![0.0, 5.0, 7.0]);
/// ```
pub fn deduplicate_shock(time: &[f64], radius: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if time.len() != radius.len() {
        return Err(Error::UnexpectedLength {
            expected: time.len(),
            found: radius.len(),
        });
    }

    let mut smooth_time = vec![0.0];
    let mut smooth_radius = vec![0.0];

    let mut offset = 0;
    for (count, value) in radius.iter().dedup_with_count() {
        offset += count;
        smooth_time.push(time[offset - 1]);
        smooth_radius.push(*value);
    }

    trace!("Smoothed shock points = {}", smooth_time.len());
    Ok((smooth_time, smooth_radius))
}

/// Shock radius and velocity on [SHOCK_SAMPLES] evenly spaced times
///
/// See [calculate_shock_with] for details.
pub fn calculate_shock(time: &[f64], radius: &[f64]) -> Result<Shock> {
    calculate_shock_with(time, radius, SHOCK_SAMPLES)
}

/// Shock radius and velocity on `samples` evenly spaced times
///
/// The raw radius is first passed through [deduplicate_shock], then linearly
/// interpolated onto `samples` times spanning `[time[0], time[last]]`. The
/// velocity is the numerical gradient of that radius against time.
///
/// Fails for empty or non-finite input, mismatched lengths, fewer than two
/// samples, or a time range of zero width.
///
/// ```rust
/// # use flashy_analysis::calculate_shock_with;
/// let time = [0.0, 1.0, 2.0];
/// let radius = [2.0, 2.0, 6.0];
///
/// let shock = calculate_shock_with(&time, &radius, 3).unwrap();
/// assert_eq!(shock.time, vec![0.0, 1.0, 2.0]);
/// assert_eq!(shock.radius, vec![0.0, 2.0, 6.0]);
/// assert_eq!(shock.velocity, vec![2.0, 3.0, 4.0]);
/// ```
pub fn calculate_shock_with(time: &[f64], radius: &[f64], samples: usize) -> Result<Shock> {
    let (smooth_time, smooth_radius) = deduplicate_shock(time, radius)?;

    // rejects empty input, NaN and inf
    time.try_min()?;
    let peak = radius.try_max()?;

    let (start, stop) = (time[0], time[time.len() - 1]);
    if start == stop {
        return Err(Error::DegenerateTimeRange(start));
    }
    debug!("Resampling shock over [{start}, {stop}] with {samples} samples, peak radius {peak}");

    let time = linspace(start, stop, samples);
    let radius = interp(&time, &smooth_time, &smooth_radius)?;
    let velocity = gradient(&radius, &time)?;

    Ok(Shock {
        time,
        radius,
        velocity,
    })
}
