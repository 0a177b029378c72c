use crate::core::{Column, ColumnRef};
use crate::error::{Error, Result};

use serde::Serialize;

/// One block of rows between two header lines
///
/// Every run of a [Dat](crate::Dat) file shares the column names from the
/// first header in the file. Column types are inferred per run, so the same
/// column may be [Column::Integer] in one run and [Column::Float] in another.
///
/// ```rust
/// # use flashy_dat::{Column, Run};
/// let run = Run::new(
///     vec!["time".into(), "mass".into()],
///     vec![Column::Float(vec![0.0, 0.1]), Column::Float(vec![2.0, 2.1])],
/// );
///
/// assert_eq!(run.num_rows(), 2);
/// assert_eq!(run.column("mass").unwrap(), &Column::Float(vec![2.0, 2.1]));
/// assert_eq!(run.column(0).unwrap(), &Column::Float(vec![0.0, 0.1]));
/// assert!(run.column("dens").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Run {
    /// Column names, in header order
    names: Vec<String>,
    /// Column values, one entry per name
    columns: Vec<Column>,
}

impl Run {
    /// Create a run from matching lists of names and columns
    pub fn new(names: Vec<String>, columns: Vec<Column>) -> Self {
        Self { names, columns }
    }

    /// Column names, in header order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows in the run
    ///
    /// Zero-row runs are kept, for example when the file ends on a header.
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// True if the run has no rows
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Find the position of a column
    pub fn position(&self, column: &ColumnRef) -> Result<usize> {
        match column {
            ColumnRef::Position(i) if *i < self.columns.len() => Ok(*i),
            ColumnRef::Name(name) => self
                .names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| Error::InvalidIndex(name.clone())),
            _ => Err(Error::InvalidIndex(column.to_string())),
        }
    }

    /// Get a column by position or name
    pub fn column(&self, column: impl Into<ColumnRef>) -> Result<&Column> {
        let column = column.into();
        let i = self.position(&column)?;
        self.columns
            .get(i)
            .ok_or_else(|| Error::InvalidIndex(column.to_string()))
    }

    /// Iterate over `(name, column)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(self.columns.iter())
    }
}
