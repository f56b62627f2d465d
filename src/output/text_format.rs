//! Fixed-width text output, one host per line.

use crate::scanner::HostResult;
use crate::types::join_ports;
use std::io::{self, Write};

/// `"{host:<25} {ALIVE|DEAD} Ports: {ports}"`
pub fn format_line(result: &HostResult) -> String {
    format!(
        "{:<25} {} Ports: {}",
        result.host.as_str(),
        if result.alive { "ALIVE" } else { "DEAD" },
        join_ports(&result.open_ports)
    )
}

pub fn write_text<W: Write>(results: &[HostResult], writer: &mut W) -> io::Result<()> {
    for result in results {
        writeln!(writer, "{}", format_line(result))?;
    }
    Ok(())
}
