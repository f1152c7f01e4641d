//! Console report of per-repository results

use std::io::{self, Write};

use super::config::{OUTPUT_INDENT, SUMMARY_RULE_WIDTH};
use super::stats::RunStatistics;
use crate::git::ExecutionResult;
use crate::utils::Palette;

const SUCCESS_MARKER: &str = "✅";
const FAILURE_MARKER: &str = "❌";

/// Writes each non-empty line of `text` indented and grayed
fn write_indented(out: &mut impl Write, text: &str, palette: &Palette) -> io::Result<()> {
    for line in text.lines().filter(|line| !line.is_empty()) {
        writeln!(out, "{}", palette.gray(&format!("{OUTPUT_INDENT}{line}")))?;
    }
    Ok(())
}

/// Prints one entry per result, in the order given, and tallies them
///
/// Successes show their output inline, or indented below the name when
/// `verbose`. Failures always show their output indented and, when `verbose`,
/// the underlying error as well.
pub fn report_results<'a>(
    results: impl IntoIterator<Item = &'a ExecutionResult>,
    verbose: bool,
    palette: &Palette,
    out: &mut impl Write,
) -> io::Result<RunStatistics> {
    let mut stats = RunStatistics::new();

    for result in results {
        stats.record(result.success);

        if result.success {
            let header = palette.green(&format!("{SUCCESS_MARKER} {}:", result.name));
            if verbose {
                writeln!(out, "{header}")?;
                write_indented(out, &result.output, palette)?;
            } else if result.output.is_empty() {
                writeln!(out, "{header}")?;
            } else {
                writeln!(out, "{header} {}", result.output)?;
            }
        } else {
            writeln!(out, "{}", palette.red(&format!("{FAILURE_MARKER} {}:", result.name)))?;
            write_indented(out, &result.output, palette)?;
            if verbose {
                if let Some(error) = &result.error {
                    write_indented(out, &format!("Error: {error}"), palette)?;
                }
            }
        }
    }

    Ok(stats)
}

/// Prints the closing rule and summary line
pub fn write_summary(
    stats: &RunStatistics,
    palette: &Palette,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "─".repeat(SUMMARY_RULE_WIDTH))?;
    writeln!(out, "{}", stats.generate_summary(palette))
}
