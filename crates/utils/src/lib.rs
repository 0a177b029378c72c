//! Common numerical and formatting utilities
//!
//! These are left public for convenience.
//!
//! The FLASH post-processing only needs a handful of numpy-style routines
//! (`linspace`, `interp`, `gradient`), so they live here rather than pulling
//! in a full array library.
#![doc = include_str!("../readme.md")]

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod numeric;
mod slice_ext;
mod value_ext;

// Flatten
pub use error::{Error, Result};
pub use numeric::{gradient, interp, linspace};
pub use slice_ext::SliceExt;
pub use value_ext::ValueExt;
