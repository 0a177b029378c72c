//! Result and Error types for flashy-dat

/// Type alias for `Result<T, dat::Error>`
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the `flashy-dat` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// Query made before a file was successfully read
    #[error("no dat file has been loaded yet")]
    NotLoaded,

    /// Index of the wrong shape, or a column that does not exist
    #[error("invalid index \"{0}\"")]
    InvalidIndex(String),

    /// Run index past the number of runs in the file
    #[error("run {index} out of range (found {found} runs)")]
    RunOutOfRange { index: usize, found: usize },

    /// The file has no lines at all
    #[error("file is empty")]
    EmptyFile,

    /// No column names could be recovered from the header
    #[error("header too short to contain column names: \"{0}\"")]
    HeaderTooShort(String),

    /// Generic error type for nom parser results
    #[error("parser failed")]
    ParseError(String),
}

// the nom errors borrow the input, so keep only the text
impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Self::ParseError(format!("{err:?}"))
    }
}
