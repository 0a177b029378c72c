//! Axis labels built from the registry

use crate::registry::{label, unit};

use log::trace;

/// Axis label for a variable, including any scale factor and unit
///
/// The label falls back to `var` itself for unknown variables. A scale
/// marker is added when the data are normalised:
///
/// - `log` with `normalise != 0` adds `×10^normalise`
/// - linear with `normalise != 1` adds `×normalise`
///
/// Any known unit follows in the same bracketed group.
///
/// ```rust
/// # use flashy_labels::get_plot_label;
/// assert_eq!(get_plot_label("dens", 0, true), r"$\rho$ [$\mathrm{g\,cm^{-3}}$]");
/// assert_eq!(get_plot_label("r", 5, false), r"$r$ [$\times 5$ $\mathrm{cm}$]");
/// assert_eq!(get_plot_label("ye", 2, true), r"$Y_e$ [$\times 10^{2}$]");
/// assert_eq!(get_plot_label("ye", 1, false), r"$Y_e$");
/// ```
pub fn get_plot_label(var: &str, normalise: i32, log: bool) -> String {
    let mut text = match label(var) {
        Some(label) => label.to_string(),
        None => {
            trace!("No label for {var:?}");
            var.to_string()
        }
    };

    let unit = unit(var);
    let scale = match (log, normalise) {
        (true, n) if n != 0 => Some(format!(r"$\times 10^{{{n}}}$")),
        (false, n) if n != 1 => Some(format!(r"$\times {n}$")),
        _ => None,
    };

    match (scale, unit) {
        (Some(scale), Some(unit)) => text += &format!(" [{scale} {unit}]"),
        (Some(scale), None) => text += &format!(" [{scale}]"),
        (None, Some(unit)) => text += &format!(" [{unit}]"),
        (None, None) => (),
    }

    text
}

/// Axis label with no normalisation
///
/// Same as `get_plot_label(var, 0, true)`.
pub fn plot_label(var: &str) -> String {
    get_plot_label(var, 0, true)
}
