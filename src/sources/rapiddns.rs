//! RapidDNS subdomain listing (HTML).

use super::{accept, fetch_body, PassiveSource};
use crate::error::SourceResult;
use crate::types::Host;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeSet;

const NAME: &str = "rapiddns";

pub struct RapidDns {
    client: Client,
}

impl RapidDns {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PassiveSource for RapidDns {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch(&self, domain: &str) -> SourceResult<BTreeSet<Host>> {
        let url = format!("https://rapiddns.io/subdomain/{domain}?full=1");
        let body = fetch_body(&self.client, NAME, &url).await?;
        Ok(parse(&body, domain))
    }
}

/// Pull the first table cell from every line that mentions the domain.
pub(crate) fn parse(body: &str, domain: &str) -> BTreeSet<Host> {
    body.lines()
        .filter(|line| line.to_lowercase().contains(domain))
        .filter_map(|line| {
            let (_, rest) = line.split_once("<td>")?;
            let (cell, _) = rest.split_once("</td>")?;
            accept(cell, domain)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_rows() {
        let body = "\
<title>example.com subdomains</title>
<tr><th>1</th><td>blog.example.com</td><td>192.0.2.7</td></tr>
<tr><th>2</th><td>Shop.Example.com</td><td>A</td></tr>
<tr><th>3</th><td>10.0.0.1</td><td>ptr.example.com</td></tr>
<tr><th>4</th><td>unrelated.net</td></tr>";

        let hosts = parse(body, "example.com");
        let names: Vec<_> = hosts.iter().map(Host::as_str).collect();
        assert_eq!(names, vec!["blog.example.com", "shop.example.com"]);
    }
}
