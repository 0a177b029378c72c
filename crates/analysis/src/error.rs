//! Result and Error types for flashy-analysis

/// Type alias for Result<T, analysis::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `flashy-analysis` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("invalid slice")]
    Utils(#[from] flashy_utils::Error),

    #[error("failed to read a bounce time from \"{0}\"")]
    InvalidBounceTime(String),

    #[error("unexpected length (expected {expected:?}, found {found:?})")]
    UnexpectedLength { expected: usize, found: usize },

    #[error("time range [{0}, {0}] has zero width")]
    DegenerateTimeRange(f64),
}
