//! Server availability ranges from a status log.
//!
//! Input lines are `<status> <timestamp>`. Statuses 400 and 500 mark the
//! server unavailable; anything else marks it available. Each stretch of
//! unavailability becomes one output line:
//!
//! ```text
//! <first unavailable line> - <first available line after it>
//! ```

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A closed stretch of unavailability, as the two log lines bounding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Range {
    pub start: String,
    pub end: String,
}

fn is_unavailable(status: u16) -> bool {
    matches!(status, 400 | 500)
}

fn parse_status(line_no: usize, line: &str) -> Result<u16> {
    let mut parts = line.split_whitespace();
    let malformed = || Error::MalformedLine {
        line: line_no,
        content: line.to_string(),
    };
    let status = parts.next().and_then(|s| s.parse().ok()).ok_or_else(malformed)?;
    parts.next().ok_or_else(malformed)?;
    Ok(status)
}

/// Collect closed ranges from `reader`. Blank and `#` lines are skipped.
pub fn ranges<R: BufRead>(reader: R) -> Result<Vec<Range>> {
    let mut out = Vec::new();
    let mut open: Option<String> = None;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let down = is_unavailable(parse_status(i + 1, trimmed)?);
        match (open.take(), down) {
            (None, true) => open = Some(trimmed.to_string()),
            (Some(start), false) => out.push(Range {
                start,
                end: trimmed.to_string(),
            }),
            (still_open, _) => open = still_open,
        }
    }
    if let Some(start) = open {
        tracing::warn!(%start, "unavailable range still open at end of log");
    }
    Ok(out)
}

/// Read the log at `input` and write one line per range to `output`.
pub fn process(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let found = ranges(BufReader::new(File::open(input)?))?;
    let mut w = BufWriter::new(File::create(output)?);
    for r in &found {
        writeln!(w, "{} - {}", r.start, r.end)?;
    }
    w.flush()?;
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        ranges = found.len(),
        "downtime ranges written"
    );
    Ok(())
}
