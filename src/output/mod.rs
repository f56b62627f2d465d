//! Output formatting module.
//!
//! Renders a [`ScanReport`] as a table, CSV, fixed-width text or JSON.
//! Every writer takes an `io::Write` so reports can go to stdout or a file.

mod csv_format;
mod json_format;
mod plain;
mod text_format;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{
    print_error, print_info, print_scan_header, print_success, print_warning, write_table,
};
pub use text_format::{format_line, write_text};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::report::ScanReport;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the report to stdout in the chosen format.
pub fn print_report(report: &ScanReport, format: OutputFormat) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Plain => write_table(report, &mut out)?,
        OutputFormat::Json => write_json(report, &mut out)?,
        OutputFormat::Csv => write_csv(&report.results, &mut out)?,
        OutputFormat::Txt => write_text(&report.results, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Write the report to `path` in the chosen format.
pub fn export_report(report: &ScanReport, format: OutputFormat, path: &Path) -> CliResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Plain => write_table(report, &mut out)?,
        OutputFormat::Json => write_json(report, &mut out)?,
        OutputFormat::Csv => write_csv(&report.results, &mut out)?,
        OutputFormat::Txt => write_text(&report.results, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
