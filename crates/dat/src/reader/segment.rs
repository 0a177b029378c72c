use std::ops::Range;

use crate::parsers::{line_kind, Line};

/// Split the file into the line spans of each run
///
/// Keeps a count of data lines seen since the last header (`next_run`) and
/// the number of lines already accounted for (`skip`).
///
/// - A data line extends the current run
/// - A header with no data before it (the first line, or a repeated header)
///   is skipped
/// - A header after data closes the run, then is skipped itself
///
/// Whatever follows the last processed header up to the end of the file is
/// the final run, which is empty when the file ends on a header.
pub(super) fn spans<S: AsRef<str>>(lines: &[S], marker: char) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut skip = 0;
    let mut next_run = 0;

    for line in lines {
        match line_kind(line.as_ref(), marker) {
            Line::Data => next_run += 1,
            Line::Header if next_run == 0 => skip += 1,
            Line::Header => {
                spans.push(skip..skip + next_run);
                skip += next_run + 1;
                next_run = 0;
            }
        }
    }

    spans.push(skip..lines.len());
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_run() {
        let lines = ["# head", "1", "2", "3"];
        assert_eq!(spans(&lines, '#'), vec![1..4]);
    }

    #[test]
    fn repeated_header_splits_runs() {
        let lines = ["# head", "1", "2", "3", "# head", "4", "5"];
        assert_eq!(spans(&lines, '#'), vec![1..4, 5..7]);
    }

    #[test]
    fn consecutive_headers_are_absorbed() {
        let lines = ["# head", "# head", "1", "# head", "# head", "2"];
        assert_eq!(spans(&lines, '#'), vec![2..3, 5..6]);
    }

    #[test]
    fn trailing_header_gives_empty_run() {
        let lines = ["# head", "1", "2", "# head"];
        assert_eq!(spans(&lines, '#'), vec![1..3, 4..4]);
    }

    #[test]
    fn header_only() {
        let lines = ["# head"];
        assert_eq!(spans(&lines, '#'), vec![1..1]);
    }
}
