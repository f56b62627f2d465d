//! Passive DNS records from AlienVault OTX.

use super::{accept, fetch_body, PassiveSource};
use crate::error::{SourceError, SourceResult};
use crate::types::Host;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeSet;

const NAME: &str = "otx";

#[derive(Debug, Deserialize)]
struct PassiveDnsResponse {
    #[serde(default)]
    passive_dns: Vec<PassiveDnsRecord>,
}

#[derive(Debug, Deserialize)]
struct PassiveDnsRecord {
    #[serde(default)]
    hostname: String,
}

pub struct AlienVaultOtx {
    client: Client,
}

impl AlienVaultOtx {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PassiveSource for AlienVaultOtx {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch(&self, domain: &str) -> SourceResult<BTreeSet<Host>> {
        let url =
            format!("https://otx.alienvault.com/api/v1/indicators/domain/{domain}/passive_dns");
        let body = fetch_body(&self.client, NAME, &url).await?;
        parse(&body, domain)
    }
}

pub(crate) fn parse(body: &str, domain: &str) -> SourceResult<BTreeSet<Host>> {
    let response: PassiveDnsResponse =
        serde_json::from_str(body).map_err(|e| SourceError::Parse {
            source_name: NAME.to_string(),
            reason: e.to_string(),
        })?;

    Ok(response
        .passive_dns
        .iter()
        .filter_map(|record| accept(&record.hostname, domain))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let body = r#"{
            "passive_dns": [
                {"hostname": "mail.example.com", "address": "192.0.2.1"},
                {"hostname": "mail.example.com."},
                {"hostname": ""},
                {"address": "192.0.2.2"},
                {"hostname": "cdn.other.org"}
            ],
            "count": 5
        }"#;

        let hosts = parse(body, "example.com").unwrap();
        assert_eq!(hosts.into_iter().collect::<Vec<_>>(), vec![Host::new("mail.example.com")]);
    }

    #[test]
    fn test_missing_key_is_empty() {
        assert!(parse("{}", "example.com").unwrap().is_empty());
    }
}
