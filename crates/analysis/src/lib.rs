//! Derived quantities from FLASH simulation outputs
//!
//! ```rust, no_run
//! # use flashy_analysis::{calculate_shock, get_bounce_time};
//! // Time of core bounce from the run log
//! if let Some(t_bounce) = get_bounce_time("path/to/flash.log").unwrap() {
//!     println!("bounce at {t_bounce} s");
//! }
//!
//! // Shock trajectory from the dat file columns
//! let time = [0.0, 0.1, 0.2, 0.3];
//! let radius = [0.0, 1.0e6, 1.0e6, 3.0e6];
//! let shock = calculate_shock(&time, &radius).unwrap();
//! assert_eq!(shock.velocity.len(), 1000);
//! ```
#![doc = include_str!("../readme.md")]

mod bounce;
mod error;
mod shell;
mod shock;

#[doc(inline)]
pub use bounce::{get_bounce_time, BOUNCE_MARKER};

#[doc(inline)]
pub use shell::{calculate_shell_mass, shell_mass};

#[doc(inline)]
pub use shock::{calculate_shock, calculate_shock_with, deduplicate_shock, Shock, SHOCK_SAMPLES};

#[doc(inline)]
pub use error::{Error, Result};
