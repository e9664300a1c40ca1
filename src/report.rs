//! Renders the result of a counting pass as human-readable text.
//!
//! Every function here writes into a caller-supplied sink. Whoever calls them
//! decides whether that is stdout, a file opened in append mode, or a
//! buffer in a test.

use std::io::Write;

use crate::{Error, HistogramResult};

/// format a bin edge with at most 6 decimal places and no trailing zeros,
/// so that edges like `3 * 0.1` print as `0.3` rather than exposing the
/// rounding error of the multiplication
pub fn format_edge(value: f64) -> String {
    let mut s = format!("{value:.6}");
    if s.contains('.') {
        let trimmed_len = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed_len);
    }
    if s == "-0" { String::from("0") } else { s }
}

fn write_bin_lines<W: Write>(sink: &mut W, result: &HistogramResult) -> std::io::Result<()> {
    for (i, count) in result.counts().iter().enumerate() {
        let (lo, hi) = result.bin_range(i);
        writeln!(sink, "{}-{} deg: {}", format_edge(lo), format_edge(hi), count)?;
    }
    Ok(())
}

/// write the console form of the report:
///
/// ```text
/// Angular Correlation Function Histogram:
/// 0-1 deg: 2
/// ...
///
/// Total pairs counted: 3
/// Time taken (CPU): 0.000001 seconds
/// ```
pub fn write_console_summary<W: Write>(
    sink: &mut W,
    result: &HistogramResult,
) -> Result<(), Error> {
    let inner = |sink: &mut W| -> std::io::Result<()> {
        writeln!(sink, "\nAngular Correlation Function Histogram:")?;
        write_bin_lines(sink, result)?;
        writeln!(sink, "\nTotal pairs counted: {}", result.counted_pairs())?;
        writeln!(
            sink,
            "Time taken (CPU): {} seconds",
            result.elapsed().as_secs_f64()
        )?;
        Ok(())
    };
    inner(sink).map_err(|e| Error::io(None, e))
}

/// write a report section labelled by `label` (typically the path of the
/// catalog). Sections are self-contained, so repeatedly appending them to
/// one file builds up a log of runs.
pub fn write_report<W: Write>(
    sink: &mut W,
    label: &str,
    result: &HistogramResult,
) -> Result<(), Error> {
    let inner = |sink: &mut W| -> std::io::Result<()> {
        writeln!(sink, "\n=== Results for file: {label} ===")?;
        writeln!(sink, "Angular Correlation Function Histogram:")?;
        write_bin_lines(sink, result)?;
        writeln!(sink, "Total pairs counted: {}", result.counted_pairs())?;
        writeln!(
            sink,
            "Expected total pairs (n(n-1)/2): {}",
            result.expected_total_pairs()
        )?;
        writeln!(
            sink,
            "Time taken (CPU): {} seconds",
            result.elapsed().as_secs_f64()
        )?;
        sink.flush()
    };
    inner(sink).map_err(|e| Error::io(None, e))
}
