//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::report::ScanReport;
use crate::types::join_ports;
use console::{style, Style};
use std::io::{self, Write};

const RULE: &str = "═══════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────";

/// Render the report as a results table.
pub fn write_table<W: Write>(report: &ScanReport, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(
        out,
        "                 {} Subdomain Scan Results",
        style("SubScout").cyan().bold()
    )?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(out)?;

    writeln!(out, "  {} {}", style("Domain:").bold(), report.domain)?;
    writeln!(
        out,
        "  {} {} ({})",
        style("Method:").bold(),
        report.method,
        report.strategy
    )?;
    writeln!(
        out,
        "  {} {} candidates verified in {:.2}s, {} alive",
        style("Statistics:").bold(),
        report.candidates,
        report.duration_ms as f64 / 1000.0,
        style(report.alive).green().bold()
    )?;
    writeln!(out)?;

    if report.results.is_empty() {
        writeln!(out, "  {}", style("No hosts to display.").dim())?;
    } else {
        let width = report
            .results
            .iter()
            .map(|r| r.host.as_str().len())
            .max()
            .unwrap_or(0)
            .max("SUBDOMAIN".len());

        writeln!(out, "  {}", style(THIN_RULE).dim())?;
        writeln!(
            out,
            "  {:<width$}  {:<6}  {}",
            style("SUBDOMAIN").bold(),
            style("ALIVE?").bold(),
            style("OPEN PORTS").bold(),
        )?;
        writeln!(out, "  {}", style(THIN_RULE).dim())?;

        for result in &report.results {
            let (label, label_style) = if result.alive {
                ("yes", Style::new().green().bold())
            } else {
                ("no", Style::new().red())
            };

            writeln!(
                out,
                "  {:<width$}  {:<6}  {}",
                style(result.host.as_str()).cyan(),
                label_style.apply_to(label),
                style(join_ports(&result.open_ports)).yellow()
            )?;
        }

        writeln!(out, "  {}", style(THIN_RULE).dim())?;
    }

    writeln!(out)?;
    Ok(())
}

/// Print a header before discovery begins.
pub fn print_scan_header(domain: &str, method: &str, concurrency: usize) {
    eprintln!();
    eprintln!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("SubScout").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("{} Domain: {}", style("•").dim(), style(domain).white().bold());
    eprintln!(
        "{} Method: {} (concurrency {})",
        style("•").dim(),
        style(method).yellow(),
        concurrency
    );
    eprintln!();
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    eprintln!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold(), msg);
}
