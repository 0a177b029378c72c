use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flashy_utils::ValueExt;
use log::{info, warn};

use crate::error::{Error, Result};

/// Write a profile file with the default settings
///
/// `data` pairs each variable name with one value per entry of `r`. The
/// output is readable by [Profile::from_file](crate::Profile::from_file).
///
/// ```rust, no_run
/// # use flashy_profile::write_profile;
/// let r = [1.0e5, 2.0e5, 3.0e5];
/// let dens = vec![1.0e10, 5.0e9, 1.0e9];
/// let temp = vec![1.0e10, 8.0e9, 5.0e9];
///
/// write_profile(&r, &[("dens", dens), ("temp", temp)], None, "out.flash").unwrap();
/// ```
pub fn write_profile<P, K, V>(
    r: &[f64],
    data: &[(K, V)],
    comment: Option<&str>,
    path: P,
) -> Result<()>
where
    P: AsRef<Path>,
    K: AsRef<str>,
    V: AsRef<[f64]>,
{
    let mut writer = ProfileWriter::new();
    if let Some(comment) = comment {
        writer.set_comment(comment);
    }
    writer.write(r, data, path)
}

/// Configurable writer for profile files
///
/// Values are written in scientific notation with 16 digits after the
/// decimal point by default, enough to recover every f64 exactly.
#[derive(Debug, Clone)]
pub struct ProfileWriter {
    /// Text of the leading comment line
    comment: String,
    /// Digits after the decimal point
    precision: usize,
}

impl Default for ProfileWriter {
    fn default() -> Self {
        Self {
            comment: String::new(),
            precision: 16,
        }
    }
}

impl ProfileWriter {
    /// Writer with an empty comment and full precision
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment written after the `#` on the first line
    pub fn set_comment(&mut self, comment: &str) {
        self.comment = comment.lines().next().unwrap_or_default().to_string();
    }

    /// Set the number of digits after the decimal point
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
    }

    /// Write `r` and every variable in `data` to `path`
    pub fn write<P, K, V>(&self, r: &[f64], data: &[(K, V)], path: P) -> Result<()>
    where
        P: AsRef<Path>,
        K: AsRef<str>,
        V: AsRef<[f64]>,
    {
        for (name, values) in data {
            let (name, found) = (name.as_ref(), values.as_ref().len());
            if found != r.len() {
                return Err(Error::UnequalLength {
                    name: name.to_string(),
                    expected: r.len(),
                    found,
                });
            }
            if name.split_whitespace().count() != 1 {
                warn!("Variable name {name:?} will not read back as a single word");
            }
        }

        let path = path.as_ref();
        info!("Writing {}", path.display());
        let mut f = BufWriter::new(File::create(path)?);

        writeln!(f, "# {}", self.comment)?;
        writeln!(f, "number of variables = {}", data.len())?;
        for (name, _) in data {
            writeln!(f, "{}", name.as_ref())?;
        }

        for (i, radius) in r.iter().enumerate() {
            let mut row = radius.sci(self.precision, 2);
            for (_, values) in data {
                row.push(' ');
                row.push_str(&values.as_ref()[i].sci(self.precision, 2));
            }
            writeln!(f, "{row}")?;
        }

        f.flush()?;
        Ok(())
    }
}
