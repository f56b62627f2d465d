//! CSV output formatting.

use crate::scanner::HostResult;
use crate::types::join_ports;
use std::io::Write;

/// Write results as `subdomain,alive,open_ports`.
pub fn write_csv<W: Write>(results: &[HostResult], writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["subdomain", "alive", "open_ports"])?;

    for result in results {
        let ports = join_ports(&result.open_ports);
        wtr.write_record([
            result.host.as_str(),
            if result.alive { "true" } else { "false" },
            ports.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
