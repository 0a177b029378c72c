// Crate types
use crate::core::{Column, ColumnRef, DatIndex, Run};
use crate::error::{Error, Result};
use crate::reader::DatReader;

// Other libraries
use flashy_utils::f;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Parsed content of a dat file
#[derive(Debug, Serialize)]
pub(crate) struct Dataset {
    /// Column names from the first header of the file
    pub(crate) columns: Vec<String>,
    /// Every run in the file, in order
    pub(crate) runs: Vec<Run>,
}

/// Whether a file has been read yet
#[derive(Debug, Default)]
enum State {
    #[default]
    Unloaded,
    Loaded(Dataset),
}

/// Data structure to store FLASH dat file content
///
/// This [Dat] is the primary data structure containing the parsed file data.
/// It is either unloaded, in which case every query fails with
/// [Error::NotLoaded], or holds every [Run] of a successfully read file.
///
/// Queries take anything that converts into a [DatIndex]:
///
/// | Index                | Result                                       |
/// | -------------------- | -------------------------------------------- |
/// | `usize`              | column at that position across all runs      |
/// | `&str`/`String`      | named column across all runs                 |
/// | `(run, usize/&str)`  | column from a single run                     |
///
/// ```rust, no_run
/// # use flashy_dat::Dat;
/// let dat = Dat::from_file("path/to/flash.dat").unwrap();
///
/// // every value of the first column
/// let time = dat.get(0).unwrap();
///
/// // only the rows written by the last restart
/// let last = dat.num_runs().unwrap() - 1;
/// let mass = dat.get((last, "mass")).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct Dat {
    state: State,
}

impl Dat {
    /// Create a new, unloaded [Dat]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a dat file
    ///
    /// Parses the file at `path` using the default [DatReader] settings. The
    /// `path` may be a [&str], [String], [Path], etc..
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DatReader::new().parse(path)
    }

    /// Wrap an already parsed dataset
    pub(crate) fn from_dataset(dataset: Dataset) -> Self {
        Self {
            state: State::Loaded(dataset),
        }
    }

    /// Read a dat file into this [Dat]
    ///
    /// Replaces anything previously loaded. On failure the [Dat] is left
    /// unloaded.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.state = State::Unloaded;
        let dataset = DatReader::new().read_dataset(path)?;
        self.state = State::Loaded(dataset);
        Ok(())
    }

    /// True once a file has been read successfully
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, State::Loaded(_))
    }

    fn dataset(&self) -> Result<&Dataset> {
        match &self.state {
            State::Loaded(dataset) => Ok(dataset),
            State::Unloaded => Err(Error::NotLoaded),
        }
    }

    /// Column names shared by every run
    pub fn column_names(&self) -> Result<&[String]> {
        Ok(&self.dataset()?.columns)
    }

    /// Number of runs in the file
    pub fn num_runs(&self) -> Result<usize> {
        Ok(self.dataset()?.runs.len())
    }

    /// All runs, in file order
    pub fn runs(&self) -> Result<&[Run]> {
        Ok(&self.dataset()?.runs)
    }

    /// Get a single run
    pub fn get_run(&self, run: usize) -> Result<&Run> {
        let runs = &self.dataset()?.runs;
        runs.get(run).ok_or(Error::RunOutOfRange {
            index: run,
            found: runs.len(),
        })
    }

    /// Get the values of a column
    ///
    /// A plain column reference concatenates the column across every run in
    /// order. A `(run, column)` pair returns the column of that run only.
    pub fn get(&self, index: impl Into<DatIndex>) -> Result<Column> {
        match index.into() {
            DatIndex::Column(column) => self.get_column(column),
            DatIndex::RunColumn(run, column) => Ok(self.get_run(run)?.column(column)?.clone()),
        }
    }

    /// Get a column concatenated across every run
    pub fn get_column(&self, column: impl Into<ColumnRef>) -> Result<Column> {
        let dataset = self.dataset()?;
        let position = match column.into() {
            ColumnRef::Position(i) if i < dataset.columns.len() => i,
            ColumnRef::Name(name) => dataset
                .columns
                .iter()
                .position(|c| *c == name)
                .ok_or(Error::InvalidIndex(name))?,
            column => return Err(Error::InvalidIndex(column.to_string())),
        };

        let columns = dataset
            .runs
            .iter()
            .map(|run| run.column(position))
            .collect::<Result<Vec<&Column>>>()?;

        Ok(Column::concat(columns))
    }

    /// Write the loaded data to a JSON file
    ///
    /// Stores the column names and every run, with each column as a plain
    /// list of values.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let dataset = self.dataset()?;
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, dataset)?;
        Ok(())
    }
}

impl std::fmt::Display for Dat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Ok(dataset) = self.dataset() else {
            return write!(f, "Dat {{ unloaded }}");
        };

        let rows = dataset
            .runs
            .iter()
            .map(|run| f!("{}", run.num_rows()))
            .collect::<Vec<String>>()
            .join(", ");

        let mut s = "Dat {\n".to_string();
        s += &f!("    columns: {} {:?}\n", dataset.columns.len(), dataset.columns);
        s += &f!("    runs: {} (rows: {})\n}}", dataset.runs.len(), rows);
        write!(f, "{}", s)
    }
}
