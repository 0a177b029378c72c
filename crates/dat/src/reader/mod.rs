mod run;
mod segment;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, trace};

use crate::dat::{Dat, Dataset};
use crate::error::{Error, Result};
use crate::parsers::column_names;

/// Configurable reader for FLASH dat files
///
/// The defaults match the files FLASH writes: `#` marks a header line and
/// header fields are 25 characters wide. [Dat::from_file] uses these
/// defaults, and the reader is only needed for files written with different
/// conventions.
///
/// The file is read in two passes:
///
/// - The first line is read to recover the column names
/// - Every line is classified as header or data and the file is split into
///   runs at each header that follows data
///
/// Minimal Example:
/// ```rust, no_run
/// # use flashy_dat::DatReader;
/// let mut reader = DatReader::new();
/// reader.set_comment_marker('!');
/// reader.set_field_width(20);
/// let dat = reader.parse("path/to/file.dat").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DatReader {
    /// Character marking a header line
    marker: char,
    /// Width of each fixed-width header field
    width: usize,
}

impl Default for DatReader {
    fn default() -> Self {
        Self {
            marker: '#',
            width: 25,
        }
    }
}

impl DatReader {
    /// Reader with the FLASH defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the character that marks a header line
    pub fn set_comment_marker(&mut self, marker: char) {
        self.marker = marker;
    }

    /// Change the width of the fixed-width header fields
    pub fn set_field_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Parse the file at `path` into a loaded [Dat]
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<Dat> {
        Ok(Dat::from_dataset(self.read_dataset(path)?))
    }

    /// Read every run in the file
    pub(crate) fn read_dataset<P: AsRef<Path>>(&self, path: P) -> Result<Dataset> {
        let path = path.as_ref();
        info!("Reading {}", path.display());

        let columns = self.read_columns(path)?;
        debug!("Columns     = {columns:?}");

        let lines = BufReader::new(File::open(path)?)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;

        let spans = segment::spans(&lines, self.marker);
        debug!("Runs        = {}", spans.len());
        trace!("Line spans  = {spans:?}");

        let runs = spans
            .into_iter()
            .map(|span| run::parse_run(&lines[span.clone()], &columns, span.start))
            .collect();

        Ok(Dataset { columns, runs })
    }

    /// Column names from the first line of the file
    fn read_columns(&self, path: &Path) -> Result<Vec<String>> {
        let mut line = String::new();
        if BufReader::new(File::open(path)?).read_line(&mut line)? == 0 {
            return Err(Error::EmptyFile);
        }

        let columns = column_names(&line, self.width);
        if columns.is_empty() {
            return Err(Error::HeaderTooShort(line.trim_end().to_string()));
        }
        Ok(columns)
    }
}
