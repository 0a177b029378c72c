//! Plot labels, units and log-scale hints for FLASH variables
//!
//! ```rust
//! # use flashy_labels::{get_plot_label, plot_label, should_plot_log};
//! assert_eq!(plot_label("dens"), r"$\rho$ [$\mathrm{g\,cm^{-3}}$]");
//! assert_eq!(get_plot_label("temp", 9, true), r"$T$ [$\times 10^{9}$ $\mathrm{K}$]");
//! assert!(should_plot_log("dens"));
//!
//! // unknown variables fall back to their name
//! assert_eq!(plot_label("unknown_var"), "unknown_var");
//! assert!(!should_plot_log("unknown_var"));
//! ```
#![doc = include_str!("../readme.md")]

mod plot;
mod registry;

#[doc(inline)]
pub use registry::{label, should_plot_log, unit, variable, variables, Variable};

#[doc(inline)]
pub use plot::{get_plot_label, plot_label};
