use log::warn;

use crate::core::{Column, Run};
use crate::parsers::{float, integer};

/// Parse a block of data lines into a [Run]
///
/// Rows are split on whitespace and matched to `names` by position. Blank
/// lines are skipped. A short row leaves its trailing cells missing, and
/// any extra cells on a long row are dropped.
///
/// `first_line` is the 0-based line number of `lines[0]` in the file, only
/// used for messages.
pub(super) fn parse_run<S: AsRef<str>>(lines: &[S], names: &[String], first_line: usize) -> Run {
    let mut cells: Vec<Vec<Option<&str>>> = vec![Vec::new(); names.len()];

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != names.len() {
            warn!(
                "Line {}: expected {} values, found {}",
                first_line + i + 1,
                names.len(),
                tokens.len()
            );
        }

        for (j, column) in cells.iter_mut().enumerate() {
            column.push(tokens.get(j).copied());
        }
    }

    let columns = cells.iter().map(|c| infer_column(c)).collect();
    Run::new(names.to_vec(), columns)
}

/// Infer the column type, trying integer, then float, then text
///
/// Missing cells rule out integers. They become `NaN` in a float column and
/// empty strings in a text column.
fn infer_column(cells: &[Option<&str>]) -> Column {
    if cells.is_empty() {
        return Column::default();
    }

    if cells.iter().all(|c| c.is_some_and(|t| integer(t).is_some())) {
        Column::Integer(cells.iter().filter_map(|c| c.and_then(integer)).collect())
    } else if cells.iter().all(|c| c.map_or(true, |t| float(t).is_some())) {
        Column::Float(
            cells
                .iter()
                .map(|c| c.and_then(float).unwrap_or(f64::NAN))
                .collect(),
        )
    } else {
        Column::Text(
            cells
                .iter()
                .map(|c| c.unwrap_or_default().to_string())
                .collect(),
        )
    }
}
