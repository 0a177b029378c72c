//! Module for reading FLASH `.dat` files
//!
//! The `.dat` file holds the volume-integrated quantities FLASH writes every
//! few time steps, one row per step, in a fixed-width column layout.
//!
//! - [Dat] - Primary data structure containing the parsed file data
//!
//! Restarting a simulation re-emits the header line, so the file may contain
//! several independent blocks of rows:
//!
//! | Data block | Description                                              |
//! | ---------- | -------------------------------------------------------- |
//! | [Run]      | rows between two header lines, one [Column] per name     |
//! | [Column]   | typed values inferred from the text (int, float, text)   |
//!
//! Column names are taken once from the first header line and shared by every
//! run in the file.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use flashy_dat::Dat;
//! // Read all runs in the file into the core data structure
//! let dat = Dat::from_file("/path/to/flash.dat").unwrap();
//!
//! // Time across every run in the file
//! let time = dat.get("time").unwrap();
//!
//! // Mass from the second run only
//! let mass = dat.get((1, "mass")).unwrap();
//! ```
#![doc = include_str!("../readme.md")]

mod core;
mod dat;
mod error;
mod parsers;
mod reader;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use dat::Dat;

#[doc(inline)]
pub use reader::DatReader;

#[doc(inline)]
pub use crate::core::*;
