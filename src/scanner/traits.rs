//! Prober trait abstraction and result types.
//!
//! The scheduler only talks to the network through [`Prober`], so tests can
//! drive it with a scripted implementation.

use crate::types::{Host, Port};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of one TCP probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub port: Port,
    /// True iff the connection completed within the timeout.
    pub open: bool,
}

/// Liveness verdict for one host.
///
/// For ping checks `open_ports` is always empty. For port checks `alive`
/// is true iff at least one port is open, and `open_ports` follows the
/// order the ports were requested in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostResult {
    pub host: Host,
    pub alive: bool,
    pub open_ports: Vec<Port>,
}

impl HostResult {
    /// Result of a ping check.
    pub fn from_ping(host: Host, alive: bool) -> Self {
        Self {
            host,
            alive,
            open_ports: Vec::new(),
        }
    }

    /// Result of a port check.
    pub fn from_open_ports(host: Host, open_ports: Vec<Port>) -> Self {
        Self {
            host,
            alive: !open_ports.is_empty(),
            open_ports,
        }
    }
}

/// Single liveness tests against one host.
///
/// Implementations never fail observably: any error is reported as `false`.
#[async_trait]
pub trait Prober: Send + Sync {
    /// One ICMP echo round trip.
    async fn ping(&self, host: &Host) -> bool;

    /// One TCP connect attempt, bounded by `timeout`.
    async fn tcp_connect(&self, host: &Host, port: Port, timeout: Duration) -> bool;
}
