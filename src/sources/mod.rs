//! Passive subdomain sources.
//!
//! Each source is queried independently and the answers are unioned. A
//! source that fails contributes nothing; discovery itself never fails.

mod crtsh;
mod otx;
mod rapiddns;

pub use crtsh::CrtSh;
pub use otx::AlienVaultOtx;
pub use rapiddns::RapidDns;

use crate::error::{SourceError, SourceResult};
use crate::types::{normalize_subdomain, Host};
use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default timeout for a single source request.
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(15);

/// Default User-Agent sent to passive sources.
pub const DEFAULT_USER_AGENT: &str = concat!("subscout/", env!("CARGO_PKG_VERSION"));

/// A third-party service that knows subdomains of a domain.
#[async_trait]
pub trait PassiveSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch normalized subdomains of `domain`.
    async fn fetch(&self, domain: &str) -> SourceResult<BTreeSet<Host>>;
}

/// Build the HTTP client shared by all sources.
pub fn build_client(timeout: Duration, user_agent: &str) -> SourceResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| SourceError::Client(e.to_string()))
}

/// crt.sh, AlienVault OTX and RapidDNS, sharing one client.
pub fn default_sources(client: Client) -> Vec<Box<dyn PassiveSource>> {
    vec![
        Box::new(CrtSh::new(client.clone())),
        Box::new(AlienVaultOtx::new(client.clone())),
        Box::new(RapidDns::new(client)),
    ]
}

/// Query every source concurrently and return the sorted, deduplicated union.
pub async fn gather_subdomains(sources: &[Box<dyn PassiveSource>], domain: &str) -> Vec<Host> {
    let queries = sources.iter().map(|source| async move {
        let name = source.name();
        (name, source.fetch(domain).await)
    });

    let mut all = BTreeSet::new();
    for (name, outcome) in join_all(queries).await {
        match outcome {
            Ok(found) => {
                info!(source = name, count = found.len(), "source answered");
                all.extend(found);
            }
            Err(e) => warn!(source = name, error = %e, "source failed, skipping"),
        }
    }

    debug!(domain, unique = all.len(), "discovery finished");
    all.into_iter().collect()
}

/// GET `url` and return the body of a successful response.
async fn fetch_body(client: &Client, source_name: &str, url: &str) -> SourceResult<String> {
    debug!(source = source_name, url, "querying source");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::Request {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            source_name: source_name.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| SourceError::Request {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Normalize `raw` and keep it only if it belongs to `domain`.
fn accept(raw: &str, domain: &str) -> Option<Host> {
    normalize_subdomain(raw).filter(|host| host.is_within(domain))
}
