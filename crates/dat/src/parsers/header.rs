// nom parser combinators
use nom::character::complete::{digit0, multispace0};
use nom::combinator::rest;
use nom::sequence::{preceded, tuple};
use nom::IResult;

use log::trace;

/// Recover the bare column name from a fixed-width header field
///
/// FLASH writes the column index directly against the name, e.g.
/// `"  12 x-momentum"`, so any surrounding whitespace and the leading run of
/// digits are dropped.
pub(crate) fn column_name(i: &str) -> IResult<&str, &str> {
    let (i, name) = preceded(tuple((multispace0, digit0, multispace0)), rest)(i)?;
    Ok((i, name.trim_end()))
}

/// Slice of characters `[start, end)` clamped to the length of the line
fn field(chars: &[char], start: usize, end: usize) -> String {
    let n = chars.len();
    chars[start.min(n)..end.min(n)].iter().collect()
}

/// Split the header line into column names
///
/// The first character is the comment marker. The first field is the
/// `width - 1` characters after the marker, and every following field is
/// `width` characters wide after skipping a one character separator. The
/// final field is whatever remains of the line.
///
/// ```text
/// #00 time                 01 dt                    02 mass
/// ^^-------field 0-------^ ^-------field 1-------^ ^-last-
/// ```
///
/// Whitespace-splitting is no good here because the index is written flush
/// against the name. Empty trailing fields are dropped.
pub(crate) fn column_names(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.trim().chars().collect();
    let mut raw = Vec::new();

    raw.push(field(&chars, 1, width));
    let mut offset = width + 1;
    while offset + width < chars.len() {
        raw.push(field(&chars, offset, offset + width));
        offset += width + 1;
    }
    raw.push(field(&chars, offset, chars.len()));
    trace!("Raw header fields: {raw:?}");

    let mut names: Vec<String> = raw
        .iter()
        .map(|f| match column_name(f) {
            Ok((_, name)) => name.to_string(),
            Err(_) => f.trim().to_string(),
        })
        .collect();

    while names.last().is_some_and(|name| name.is_empty()) {
        names.pop();
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a header the way FLASH does, '#' then 25 wide fields
    fn header(names: &[&str]) -> String {
        let fields: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{i:02} {name:<22}"))
            .collect();
        format!("#{}", fields.join(" "))
    }

    #[test]
    fn strip_index_from_name() {
        assert_eq!(column_name("  12 x-momentum   "), Ok(("", "x-momentum")));
        assert_eq!(column_name("00 time"), Ok(("", "time")));
        assert_eq!(column_name("time"), Ok(("", "time")));
        assert_eq!(column_name("   "), Ok(("", "")));
    }

    #[test]
    fn names_from_fixed_width_header() {
        let line = header(&["time", "dt", "mass", "E_kinetic (-pot)"]);
        assert_eq!(
            column_names(&line, 25),
            vec!["time", "dt", "mass", "E_kinetic (-pot)"]
        );
    }

    #[test]
    fn multi_word_names() {
        let line = header(&["total energy", "max shock radius"]);
        assert_eq!(
            column_names(&line, 25),
            vec!["total energy", "max shock radius"]
        );
    }

    #[test]
    fn single_field_header() {
        assert_eq!(column_names("#00 time", 25), vec!["time"]);
        assert!(column_names("#", 25).is_empty());
    }
}
