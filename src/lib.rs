//! `flashy` is a small toolkit for reading and post-processing the output
//! of FLASH hydrodynamics simulations
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use flashy_utils as utils;

#[cfg(feature = "analysis")]
#[cfg_attr(docsrs, doc(cfg(feature = "analysis")))]
#[doc(inline)]
pub use flashy_analysis as analysis;

#[cfg(feature = "dat")]
#[cfg_attr(docsrs, doc(cfg(feature = "dat")))]
#[doc(inline)]
pub use flashy_dat as dat;

#[cfg(feature = "labels")]
#[cfg_attr(docsrs, doc(cfg(feature = "labels")))]
#[doc(inline)]
pub use flashy_labels as labels;

#[cfg(feature = "profile")]
#[cfg_attr(docsrs, doc(cfg(feature = "profile")))]
#[doc(inline)]
pub use flashy_profile as profile;
