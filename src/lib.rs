//! # SubScout - Subdomain Discovery and Verification
//!
//! SubScout gathers candidate subdomains of a domain from passive sources
//! (certificate transparency and passive DNS), then checks which ones are
//! alive with ICMP ping or TCP port probing.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use subscout::scanner::{verify, Strategy, SystemProber, VerifyConfig, TOP_10_PORTS};
//! use subscout::types::Host;
//!
//! #[tokio::main]
//! async fn main() {
//!     let hosts = vec![Host::new("www.example.com"), Host::new("mail.example.com")];
//!     let strategy = Strategy::FixedPorts(TOP_10_PORTS.to_vec());
//!
//!     let results = verify(&SystemProber::new(), &hosts, &strategy, &VerifyConfig::new(50))
//!         .await
//!         .unwrap();
//!
//!     for r in results {
//!         println!("{} alive={} open={:?}", r.host, r.alive, r.open_ports);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`scanner`] - the verification engine: probes, per-host port scans and
//!   the bounded-concurrency scheduler
//! - [`sources`] - passive subdomain sources and their aggregation
//! - [`types`] - `Host` and `Port` newtypes
//! - [`report`] / [`output`] - report assembly and table/CSV/text/JSON output
//! - [`config`] - persisted settings
//! - [`cli`] - command-line surface
//! - [`error`] - error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod scanner;
pub mod sources;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, VerifyError};
pub use report::ScanReport;
pub use scanner::{verify, HostResult, Prober, Strategy, VerifyConfig};
pub use types::{Host, Port};
