//! Bounce time from a FLASH log file

// crate modules
use crate::error::{Error, Result};

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// external crates
use log::{debug, info};

/// Text FLASH writes to the log when the core bounces
pub const BOUNCE_MARKER: &str = "Bounce!";

/// Find the time of core bounce in a log file
///
/// The first line containing [BOUNCE_MARKER] is used and the rest of the
/// file is never read. The bounce time is the second whitespace separated
/// word on that line. Returns `None` for a log without a bounce.
///
/// ```rust, no_run
/// # use flashy_analysis::get_bounce_time;
/// let t_bounce = get_bounce_time("path/to/flash.log").unwrap();
/// ```
pub fn get_bounce_time<P: AsRef<Path>>(path: P) -> Result<Option<f64>> {
    let path = path.as_ref();
    info!("Searching {} for bounce", path.display());

    for line in BufReader::new(File::open(path)?).lines() {
        let line = line?;
        if line.contains(BOUNCE_MARKER) {
            let time = bounce_time(&line)?;
            debug!("Bounce at t = {time}");
            return Ok(Some(time));
        }
    }

    debug!("No bounce found");
    Ok(None)
}

/// Second word of the line as a float
fn bounce_time(line: &str) -> Result<f64> {
    line.split_whitespace()
        .nth(1)
        .and_then(|word| word.parse().ok())
        .ok_or_else(|| Error::InvalidBounceTime(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_word() {
        assert_eq!(bounce_time("step 123 Bounce! radius=1e6").unwrap(), 123.0);
        assert_eq!(bounce_time(" 12  2.345E-01 Bounce!").unwrap(), 0.2345);
        assert!(bounce_time("Bounce!").is_err());
        assert!(bounce_time("at Bounce! t=0.2").is_err());
    }
}
