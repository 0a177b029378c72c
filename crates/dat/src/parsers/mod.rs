// All nom parsers split amoung files for organisation
mod header;
mod number;

// Internal re-exports for convenience
pub(crate) use header::*;
pub(crate) use number::*;

/// Line types of a dat file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    Header,
    Data,
}

/// Classify a line as a header (comment) or data line
///
/// Blank lines count as data lines so that line offsets stay in step with
/// the file, they are simply skipped when the rows are parsed.
pub(crate) fn line_kind(i: &str, marker: char) -> Line {
    if i.trim_start().starts_with(marker) {
        Line::Header
    } else {
        Line::Data
    }
}

/// More convenient error creation for nom
use nom::error::{Error, ErrorKind};
pub(in crate::parsers) fn cause(s: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(s, ErrorKind::Fail))
}
