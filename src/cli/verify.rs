//! Verify subcommand: check a host list without passive discovery.

use super::{verify_and_report, Context, VerifyArgs};
use crate::error::CliResult;
use crate::output;
use crate::types::{normalize_subdomain, Host};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Verify hosts given on the command line or in a file.
#[derive(Parser, Debug)]
pub struct VerifyCommand {
    /// Hosts to verify
    #[arg(value_name = "HOST")]
    pub hosts: Vec<String>,

    /// Read hosts from a file, one per line ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub hosts_file: Option<PathBuf>,

    #[command(flatten)]
    pub verify: VerifyArgs,
}

impl VerifyCommand {
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let plan = self.verify.plan(&ctx.settings)?;

        let mut raw = self.hosts.clone();
        if let Some(path) = &self.hosts_file {
            raw.extend(read_host_lines(path)?);
        }

        let hosts = parse_hosts(&raw);
        if hosts.is_empty() {
            output::print_warning("No hosts to verify");
            return Ok(());
        }

        verify_and_report(ctx, "(host list)", &hosts, plan, &self.verify).await?;
        Ok(())
    }
}

fn read_host_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    Ok(content.lines().map(String::from).collect())
}

/// Normalize hosts, skipping blank lines and `#` comments. Order and
/// duplicates are kept.
fn parse_hosts(raw: &[String]) -> Vec<Host> {
    raw.iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let host = normalize_subdomain(line);
            if host.is_none() {
                debug!(line, "skipping invalid host");
            }
            host
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hosts() {
        let raw: Vec<String> = ["# targets", "WWW.example.com.", "", "bad host", "dup", "dup"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let hosts = parse_hosts(&raw);
        let names: Vec<_> = hosts.iter().map(Host::as_str).collect();
        assert_eq!(names, vec!["www.example.com", "dup", "dup"]);
    }

    #[test]
    fn test_read_host_lines_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts.txt");
        fs::write(&path, "a.example.com\nb.example.com\n").unwrap();

        assert_eq!(
            read_host_lines(&path).unwrap(),
            vec!["a.example.com".to_string(), "b.example.com".to_string()]
        );
    }
}
