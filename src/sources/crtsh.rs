//! Certificate transparency logs via crt.sh.

use super::{accept, fetch_body, PassiveSource};
use crate::error::{SourceError, SourceResult};
use crate::types::Host;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeSet;

const NAME: &str = "crt.sh";

#[derive(Debug, Deserialize)]
struct CertEntry {
    /// One or more names separated by newlines.
    #[serde(default)]
    name_value: String,
}

pub struct CrtSh {
    client: Client,
}

impl CrtSh {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PassiveSource for CrtSh {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch(&self, domain: &str) -> SourceResult<BTreeSet<Host>> {
        let url = format!("https://crt.sh/?q=%25.{domain}&output=json");
        let body = fetch_body(&self.client, NAME, &url).await?;
        parse(&body, domain)
    }
}

/// Parse a crt.sh JSON answer.
pub(crate) fn parse(body: &str, domain: &str) -> SourceResult<BTreeSet<Host>> {
    let entries: Vec<CertEntry> =
        serde_json::from_str(body).map_err(|e| SourceError::Parse {
            source_name: NAME.to_string(),
            reason: e.to_string(),
        })?;

    Ok(entries
        .iter()
        .flat_map(|entry| entry.name_value.lines())
        .filter_map(|name| accept(name, domain))
        .collect())
}
