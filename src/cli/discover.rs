//! Discover subcommand: list passive-source candidates without probing.

use super::Context;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::sources::{build_client, default_sources, gather_subdomains};
use crate::types::normalize_subdomain;
use clap::Parser;
use std::io::{self, Write};

/// List subdomains found by the passive sources.
#[derive(Parser, Debug)]
pub struct DiscoverCommand {
    /// Target domain (e.g. example.com)
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    /// Print a JSON array instead of one host per line
    #[arg(long)]
    pub json: bool,
}

impl DiscoverCommand {
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let domain = normalize_domain(&self.domain)?;

        let client = build_client(ctx.settings.source_timeout(), &ctx.settings.user_agent)?;
        let hosts = gather_subdomains(&default_sources(client), &domain).await;

        if hosts.is_empty() {
            output::print_warning("No subdomains found");
            return Ok(());
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.json {
            serde_json::to_writer_pretty(&mut out, &hosts).map_err(io::Error::other)?;
            writeln!(out)?;
        } else {
            for host in &hosts {
                writeln!(out, "{host}")?;
            }
        }
        out.flush()?;

        if !ctx.quiet {
            output::print_success(&format!("{} candidates found", hosts.len()));
        }
        Ok(())
    }
}

/// Normalize the target domain the same way candidates are normalized.
pub(crate) fn normalize_domain(raw: &str) -> CliResult<String> {
    normalize_subdomain(raw)
        .map(|host| host.to_string())
        .ok_or_else(|| CliError::Other(format!("invalid domain: '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("Example.COM.").unwrap(), "example.com");
        assert!(normalize_domain("  ").is_err());
    }
}
