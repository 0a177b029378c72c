use crate::error::Error;
use std::str::FromStr;

/// Reference to a column by position or by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// Position of the column in the header, from 0
    Position(usize),
    /// Column name as written in the header
    Name(String),
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Position(i) => write!(f, "{i}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<usize> for ColumnRef {
    fn from(position: usize) -> Self {
        Self::Position(position)
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for ColumnRef {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

/// Index into a [Dat](crate::Dat) file
///
/// Either a column across every run, or a column within a single run.
/// Anything that converts into a [ColumnRef] works on its own, and a
/// `(run, column)` tuple selects a single run.
///
/// ```rust
/// # use flashy_dat::{ColumnRef, DatIndex};
/// assert_eq!(DatIndex::from(2), DatIndex::Column(ColumnRef::Position(2)));
/// assert_eq!(
///     DatIndex::from((1, "dens")),
///     DatIndex::RunColumn(1, ColumnRef::Name("dens".into()))
/// );
/// ```
///
/// Indices may also be parsed from text, for example from a command line.
/// A `run:column` pair selects a single run, and any other shape is an
/// error.
///
/// ```rust
/// # use flashy_dat::{ColumnRef, DatIndex};
/// let index: DatIndex = "1:mass".parse().unwrap();
/// assert_eq!(index, DatIndex::RunColumn(1, ColumnRef::Name("mass".into())));
///
/// let index: DatIndex = "3".parse().unwrap();
/// assert_eq!(index, DatIndex::Column(ColumnRef::Position(3)));
///
/// assert!("1:2:3".parse::<DatIndex>().is_err());
/// assert!("first:mass".parse::<DatIndex>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatIndex {
    /// A column concatenated across every run
    Column(ColumnRef),
    /// A column from a single run
    RunColumn(usize, ColumnRef),
}

impl std::fmt::Display for DatIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Column(column) => write!(f, "{column}"),
            Self::RunColumn(run, column) => write!(f, "{run}:{column}"),
        }
    }
}

impl From<ColumnRef> for DatIndex {
    fn from(column: ColumnRef) -> Self {
        Self::Column(column)
    }
}

impl From<usize> for DatIndex {
    fn from(position: usize) -> Self {
        Self::Column(position.into())
    }
}

impl From<&str> for DatIndex {
    fn from(name: &str) -> Self {
        Self::Column(name.into())
    }
}

impl From<String> for DatIndex {
    fn from(name: String) -> Self {
        Self::Column(name.into())
    }
}

impl From<&String> for DatIndex {
    fn from(name: &String) -> Self {
        Self::Column(name.into())
    }
}

impl From<(usize, ColumnRef)> for DatIndex {
    fn from((run, column): (usize, ColumnRef)) -> Self {
        Self::RunColumn(run, column)
    }
}

impl From<(usize, usize)> for DatIndex {
    fn from((run, position): (usize, usize)) -> Self {
        Self::RunColumn(run, position.into())
    }
}

impl From<(usize, &str)> for DatIndex {
    fn from((run, name): (usize, &str)) -> Self {
        Self::RunColumn(run, name.into())
    }
}

impl From<(usize, String)> for DatIndex {
    fn from((run, name): (usize, String)) -> Self {
        Self::RunColumn(run, name.into())
    }
}

impl FromStr for ColumnRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidIndex(s.to_string()));
        }

        Ok(match s.parse::<usize>() {
            Ok(position) => Self::Position(position),
            Err(_) => Self::Name(s.to_string()),
        })
    }
}

impl FromStr for DatIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [column] => Ok(Self::Column(column.parse()?)),
            [run, column] => {
                let run = run
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidIndex(s.to_string()))?;
                Ok(Self::RunColumn(run, column.parse()?))
            }
            _ => Err(Error::InvalidIndex(s.to_string())),
        }
    }
}
