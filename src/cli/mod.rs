//! CLI subcommand definitions and handlers.
//!
//! - `subscout scan <domain>` - discover and verify subdomains
//! - `subscout discover <domain>` - only list candidates
//! - `subscout verify <hosts>...` - verify a host list you already have

mod discover;
mod scan;
mod verify;

pub use discover::DiscoverCommand;
pub use scan::ScanCommand;
pub use verify::VerifyCommand;

use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output::{self, print_warning};
use crate::report::ScanReport;
use crate::scanner::{verify, Strategy, SystemProber, VerifyConfig};
use crate::types::{Host, Port, PortSpec};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::warn;

/// SubScout - passive subdomain discovery and liveness verification.
///
/// Candidates are gathered from certificate transparency and passive DNS
/// sources, then checked by ping or TCP port probing.
#[derive(Parser, Debug)]
#[command(name = "subscout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Discover subdomains and check which are alive", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH", env = "SUBSCOUT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover subdomains of a domain and verify them
    #[command(alias = "s")]
    Scan(ScanCommand),

    /// List subdomains found by the passive sources
    #[command(alias = "d")]
    Discover(DiscoverCommand),

    /// Verify hosts given on the command line or in a file
    #[command(alias = "v")]
    Verify(VerifyCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Plain,
    /// JSON report
    Json,
    /// CSV with subdomain,alive,open_ports columns
    Csv,
    /// One fixed-width line per host
    Txt,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Txt => write!(f, "txt"),
        }
    }
}

/// Shared state handed to every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: AppSettings,
    pub verbose: bool,
    pub quiet: bool,
}

impl Commands {
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        match self {
            Self::Scan(cmd) => cmd.execute(ctx).await,
            Self::Discover(cmd) => cmd.execute(ctx).await,
            Self::Verify(cmd) => cmd.execute(ctx).await,
        }
    }
}

/// Verification options shared by `scan` and `verify`.
#[derive(Args, Debug, Clone, Default)]
pub struct VerifyArgs {
    /// Verification method: ping, top10, top100 or custom
    #[arg(short, long)]
    pub method: Option<String>,

    /// Ports for the custom method (e.g. "80,443,8000-8010")
    #[arg(short, long)]
    pub ports: Option<String>,

    /// Maximum number of hosts verified at once
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Ping and connect timeout in milliseconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Format for results printed to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Also write results as CSV to this file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Also write results as text lines to this file
    #[arg(long, value_name = "PATH")]
    pub txt: Option<PathBuf>,

    /// Also write the full report as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

/// A verification plan resolved from flags and settings.
#[derive(Debug, Clone)]
pub struct Plan {
    pub method: String,
    pub strategy: Strategy,
    pub concurrency: usize,
    pub timeout: Duration,
}

impl VerifyArgs {
    /// Resolve the method name into a strategy and fill unset values from
    /// the settings. Fails before any network activity if the plan cannot
    /// run.
    pub fn plan(&self, settings: &AppSettings) -> CliResult<Plan> {
        let method = self
            .method
            .clone()
            .unwrap_or_else(|| settings.default_method.clone());

        let custom_ports: Vec<Port> = match self.ports.as_deref().map(str::trim) {
            Some(spec) if !spec.is_empty() => spec.parse::<PortSpec>()?.to_ports(),
            _ => Vec::new(),
        };

        if !Strategy::is_known_method(&method) {
            warn!(%method, "unknown method, no ports will be probed");
            print_warning(&format!(
                "unknown method '{method}': no ports will be probed and every host will be reported dead"
            ));
        } else if method != "custom" && !custom_ports.is_empty() {
            print_warning(&format!("--ports is only used by the custom method, ignoring it for '{method}'"));
        }

        let plan = Plan {
            strategy: Strategy::from_method(&method, &custom_ports),
            method,
            concurrency: self.concurrency.unwrap_or(settings.default_concurrency),
            timeout: self
                .timeout
                .map(Duration::from_millis)
                .unwrap_or_else(|| settings.timeout()),
        };

        plan.verify_config().validate(&plan.strategy)?;
        Ok(plan)
    }
}

impl Plan {
    pub fn verify_config(&self) -> VerifyConfig {
        VerifyConfig::new(self.concurrency).with_timeout(self.timeout)
    }
}

/// Verify `hosts` according to `plan`, then print and export the report.
pub(crate) async fn verify_and_report(
    ctx: &Context,
    label: &str,
    hosts: &[Host],
    plan: Plan,
    args: &VerifyArgs,
) -> CliResult<ScanReport> {
    let mut config = plan.verify_config();
    let progress = (!ctx.quiet).then(|| new_progress_bar(hosts.len()));
    if let Some(ref pb) = progress {
        config = config.with_progress(pb.clone());
    }

    let prober = SystemProber::new().with_ping_timeout(plan.timeout);
    let start = Instant::now();
    let results = verify(&prober, hosts, &plan.strategy, &config).await?;
    let elapsed = start.elapsed();

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let report = ScanReport::new(label, plan.method, plan.strategy, results, elapsed);

    output::print_report(&report, args.format)?;

    let exports = [
        (&args.csv, OutputFormat::Csv),
        (&args.txt, OutputFormat::Txt),
        (&args.json, OutputFormat::Json),
    ];
    for (path, format) in exports {
        if let Some(path) = path {
            output::export_report(&report, format, path)?;
            if !ctx.quiet {
                output::print_success(&format!("{} saved to {}", format, path.display()));
            }
        }
    }

    Ok(report)
}

fn new_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}
