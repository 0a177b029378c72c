use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, trace};

use crate::error::{Error, Result};
use crate::parsers::{variable_count, variable_name, vector_of_f64};
use crate::profile::{Profile, ProfileData};

/// Read a profile file
///
/// Convenience wrapper for [Profile::from_file].
pub fn read_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    Profile::from_file(path)
}

/// Read the header and every data row of a profile
///
/// Layout is an optional `#` comment line, a line ending in the number of
/// variables, one name per line, then one row per zone of `r` followed by
/// each variable. Blank and `#` lines between rows are skipped.
pub(crate) fn read_data<P: AsRef<Path>>(path: P) -> Result<ProfileData> {
    let path = path.as_ref();
    info!("Reading {}", path.display());

    // keep 1-based line numbers for error messages
    let mut lines = BufReader::new(File::open(path)?)
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)));

    let mut next_line = || lines.next().transpose();

    let (comment, count_line) = match next_line()? {
        Some((_, line)) if line.trim_start().starts_with('#') => {
            (Some(line.trim_end().to_string()), next_line()?)
        }
        first => (None, first),
    };
    debug!("Comment     = {comment:?}");

    let (_, count_line) = count_line.ok_or(Error::MissingVariableCount)?;
    let (_, count) = variable_count(&count_line)
        .map_err(|_| Error::InvalidVariableCount(count_line.trim().to_string()))?;
    debug!("Variables   = {count}");

    // the count is untrusted until every name line has been read
    let width = count
        .checked_add(1)
        .ok_or_else(|| Error::InvalidVariableCount(count_line.trim().to_string()))?;

    let mut variables = vec!["r".to_string()];
    for found in 0..count {
        let name = next_line()?
            .and_then(|(_, line)| variable_name(&line).map(str::to_string))
            .ok_or(Error::MissingVariableName {
                expected: count,
                found,
            })?;
        variables.push(name);
    }
    debug!("Names       = {variables:?}");

    let mut values = vec![Vec::new(); width];
    while let Some((n, line)) = next_line()? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            trace!("Skipping line {n}");
            continue;
        }

        let (_, row) = vector_of_f64(trimmed).map_err(|_| Error::InvalidValue {
            line: n,
            text: trimmed.to_string(),
        })?;

        if row.len() != width {
            return Err(Error::UnexpectedLength {
                line: n,
                expected: width,
                found: row.len(),
            });
        }

        for (column, value) in values.iter_mut().zip(row) {
            column.push(value);
        }
    }
    debug!("Zones       = {}", values[0].len());

    Ok(ProfileData {
        comment,
        variables,
        values,
    })
}
