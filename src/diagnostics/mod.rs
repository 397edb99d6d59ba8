//! Error reporting for the Slug compiler CLI.
//!
//! Compiler errors carry a 1-based source line; this module turns them
//! into [`ariadne`] reports that label the offending line in the source.
//! If rendering the report fails, a plain message is printed instead so
//! the error never disappears.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::driver::CompileError;

/// Returns the byte range of the given 1-based line within `source`.
///
/// The trailing newline is not included. Returns `None` when the line
/// number is outside the source (e.g. errors reported at end of file).
fn line_range(source: &str, line: usize) -> Option<Range<usize>> {
    let mut start = 0;
    for (index, text) in source.split('\n').enumerate() {
        let end = start + text.len();
        if index + 1 == line {
            return Some(start..end);
        }
        start = end + 1;
    }
    None
}

/// Returns a range covering the last byte of the source, for errors
/// without a usable line.
fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        let end = source.len().saturating_sub(1);
        end..source.len()
    }
}

/// Prints a compile error to stderr as an ariadne report.
pub(crate) fn report_error(filename: &str, source: &str, error: &CompileError) {
    let message = error.to_string();

    let range = error
        .line()
        .and_then(|line| line_range(source, line))
        .unwrap_or_else(|| end_of_source_range(source));

    let report = Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(&message)
        .with_label(
            Label::new((filename, range))
                .with_message(&message)
                .with_color(Color::Red),
        )
        .finish();

    if let Err(report_err) = report.eprint((filename, Source::from(source))) {
        eprintln!("Error in {}: {}", filename, message);
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}
