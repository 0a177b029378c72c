//! Result and Error types for the profile module

/// Type alias for `Result<T, profile::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `flashy-profile`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// Query made before a file was successfully read
    #[error("no profile has been loaded yet")]
    NotLoaded,

    /// Variable is not in the profile
    #[error("variable \"{0}\" not found")]
    UnknownVariable(String),

    /// File ended before the variable count line
    #[error("missing \"number of variables\" line")]
    MissingVariableCount,

    /// The variable count is not an integer
    #[error("failed to read variable count from \"{0}\"")]
    InvalidVariableCount(String),

    /// Fewer variable names than the count promised
    #[error("missing variable names (expected {expected:?}, found {found:?})")]
    MissingVariableName { expected: usize, found: usize },

    /// A data row contains something other than numbers
    #[error("line {line}: failed to parse values from \"{text}\"")]
    InvalidValue { line: usize, text: String },

    /// A data row has the wrong number of values
    #[error("line {line}: unexpected number of values (expected {expected:?}, found {found:?})")]
    UnexpectedLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A variable does not have one value per zone
    #[error("variable \"{name}\" has {found} values for {expected} zones")]
    UnequalLength {
        name: String,
        expected: usize,
        found: usize,
    },
}
