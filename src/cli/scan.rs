//! Scan subcommand implementation.
//!
//! Handles `subscout scan <domain>`: passive discovery followed by
//! verification of every candidate.

use super::{verify_and_report, Context, VerifyArgs};
use crate::error::CliResult;
use crate::output;
use crate::sources::{build_client, default_sources, gather_subdomains};
use clap::Parser;
use tracing::info;

/// Discover and verify subdomains of a domain.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Target domain (e.g. example.com)
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    #[command(flatten)]
    pub verify: VerifyArgs,
}

impl ScanCommand {
    /// Execute the scan command.
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let domain = super::discover::normalize_domain(&self.domain)?;

        // Reject unusable settings before touching the network.
        let plan = self.verify.plan(&ctx.settings)?;

        if !ctx.quiet {
            output::print_scan_header(&domain, &plan.method, plan.concurrency);
        }

        let client = build_client(ctx.settings.source_timeout(), &ctx.settings.user_agent)?;
        let sources = default_sources(client);
        let hosts = gather_subdomains(&sources, &domain).await;

        if hosts.is_empty() {
            output::print_warning("No subdomains found");
            return Ok(());
        }

        info!(candidates = hosts.len(), %domain, "verifying candidates");
        if !ctx.quiet {
            output::print_info(&format!("{} candidates found. Verifying...", hosts.len()));
        }

        verify_and_report(ctx, &domain, &hosts, plan, &self.verify).await?;
        Ok(())
    }
}
