//! Per-host port scanning.
//!
//! Every requested port is probed at once. The port lists handled here are
//! small (tens to about a hundred), so there is no ceiling within a host;
//! the host-level semaphore in the scheduler is a separate limit.

use crate::scanner::traits::{ProbeResult, Prober};
use crate::types::{Host, Port};
use futures::future::join_all;
use std::time::Duration;

/// Probe all `ports` on `host` and return the open ones in request order.
pub async fn scan_ports<P>(prober: &P, host: &Host, ports: &[Port], timeout: Duration) -> Vec<Port>
where
    P: Prober + ?Sized,
{
    if ports.is_empty() {
        return Vec::new();
    }

    let probes = ports.iter().map(|&port| async move {
        ProbeResult {
            port,
            open: prober.tcp_connect(host, port, timeout).await,
        }
    });

    // join_all yields results in input order regardless of completion order
    join_all(probes)
        .await
        .into_iter()
        .filter(|r| r.open)
        .map(|r| r.port)
        .collect()
}
