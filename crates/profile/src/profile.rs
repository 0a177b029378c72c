// Crate types
use crate::error::{Error, Result};
use crate::reader;
use crate::writer::ProfileWriter;

// Other libraries
use flashy_utils::f;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Parsed content of a profile file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ProfileData {
    /// Leading comment line, exactly as written
    pub(crate) comment: Option<String>,
    /// `r` followed by every declared variable
    pub(crate) variables: Vec<String>,
    /// Column-major values, one column per entry of `variables`
    pub(crate) values: Vec<Vec<f64>>,
}

/// Whether a file has been read yet
#[derive(Debug, Default)]
enum State {
    #[default]
    Unloaded,
    Loaded(ProfileData),
}

/// Data structure to store a 1-D FLASH profile
///
/// Holds the radial grid `r` and every declared variable as equal length
/// columns. Like the dat reader, a [Profile] starts unloaded and every query
/// fails with [Error::NotLoaded] until a file is read successfully.
///
/// ```rust, no_run
/// # use flashy_profile::Profile;
/// let profile = Profile::from_file("path/to/model.flash").unwrap();
/// println!("{}", profile);
///
/// for name in profile.variables().unwrap() {
///     let values = profile.get(name).unwrap();
///     println!("{name}: {} zones", values.len());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Profile {
    state: State,
}

impl Profile {
    /// Create a new, unloaded [Profile]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a profile file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            state: State::Loaded(reader::read_data(path)?),
        })
    }

    /// Read a profile file into this [Profile]
    ///
    /// Replaces anything previously loaded. On failure the [Profile] is left
    /// unloaded.
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.state = State::Unloaded;
        let data = reader::read_data(path)?;
        self.state = State::Loaded(data);
        Ok(())
    }

    /// True once a file has been read successfully
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, State::Loaded(_))
    }

    fn data(&self) -> Result<&ProfileData> {
        match &self.state {
            State::Loaded(data) => Ok(data),
            State::Unloaded => Err(Error::NotLoaded),
        }
    }

    /// The leading comment line, if the file had one
    ///
    /// Returned verbatim, including the `#` marker.
    pub fn comment(&self) -> Result<Option<&str>> {
        Ok(self.data()?.comment.as_deref())
    }

    /// Variable names in file order, starting with `r`
    pub fn variables(&self) -> Result<&[String]> {
        Ok(&self.data()?.variables)
    }

    /// Number of zones, i.e. data rows
    pub fn num_zones(&self) -> Result<usize> {
        Ok(self.r()?.len())
    }

    /// Radial coordinate of every zone
    pub fn r(&self) -> Result<&[f64]> {
        self.get("r")
    }

    /// Values of a variable, one per zone
    pub fn get(&self, variable: &str) -> Result<&[f64]> {
        let data = self.data()?;
        data.variables
            .iter()
            .position(|v| v == variable)
            .map(|i| data.values[i].as_slice())
            .ok_or_else(|| Error::UnknownVariable(variable.to_string()))
    }

    /// Write the loaded profile back out in the same format
    ///
    /// The `#` marker is stripped from the stored comment, so reading the
    /// written file recovers the same comment line.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let data = self.data()?;

        let mut writer = ProfileWriter::new();
        if let Some(comment) = &data.comment {
            writer.set_comment(comment.trim_start_matches('#').trim());
        }

        let pairs = data.variables[1..]
            .iter()
            .zip(&data.values[1..])
            .collect::<Vec<(&String, &Vec<f64>)>>();

        writer.write(&data.values[0], &pairs, path)
    }

    /// Write the loaded profile to a JSON file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let data = self.data()?;
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, data)?;
        Ok(())
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Ok(data) = self.data() else {
            return write!(f, "Profile {{ unloaded }}");
        };

        let zones = data.values.first().map_or(0, |r| r.len());

        let mut s = "Profile {\n".to_string();
        if let Some(comment) = &data.comment {
            s += &f!("    comment: {comment:?}\n");
        }
        s += &f!("    variables: {} {:?}\n", data.variables.len(), data.variables);
        s += &f!("    zones: {zones}\n}}");
        write!(f, "{}", s)
    }
}
