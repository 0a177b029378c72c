//! Module for working with FLASH 1-D profile files
//!
//! Profiles map a radial grid onto any number of named variables, one row
//! per zone. They are read into a [Profile] and written with
//! [write_profile()] or a configured [ProfileWriter].
//!
//! ```rust, no_run
//! # use flashy_profile::{Profile, write_profile};
//! // Read a progenitor model
//! let profile = Profile::from_file("path/to/s12.flash").unwrap();
//! let dens = profile.get("dens").unwrap();
//!
//! // Write a scaled copy back out
//! let r = profile.r().unwrap();
//! let dens: Vec<f64> = dens.iter().map(|d| d * 1.1).collect();
//! write_profile(r, &[("dens", dens)], Some("10% denser"), "scaled.flash").unwrap();
//! ```
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod parsers;
mod profile;
mod reader;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use profile::Profile;

#[doc(inline)]
pub use reader::read_profile;

#[doc(inline)]
pub use writer::{write_profile, ProfileWriter};

#[doc(inline)]
pub use error::{Error, Result};
