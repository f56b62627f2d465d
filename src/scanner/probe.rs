//! System prober.
//!
//! TCP probes use the operating system's connect call, which also performs
//! name resolution. Ping shells out to the platform `ping` utility, so no
//! raw-socket privileges are needed.

use crate::scanner::traits::Prober;
use crate::types::{Host, Port};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, trace};

/// Default bound on a single ping or connect attempt.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Prober backed by real sockets and the `ping` binary.
#[derive(Debug, Clone)]
pub struct SystemProber {
    ping_timeout: Duration,
}

impl SystemProber {
    pub fn new() -> Self {
        Self {
            ping_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Set the ping timeout.
    pub fn with_ping_timeout(mut self, ping_timeout: Duration) -> Self {
        self.ping_timeout = ping_timeout;
        self
    }

    fn ping_command(host: &str) -> Command {
        let count_flag = if cfg!(windows) { "-n" } else { "-c" };
        let mut cmd = Command::new("ping");
        cmd.args([count_flag, "1", host])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

impl Default for SystemProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for SystemProber {
    async fn ping(&self, host: &Host) -> bool {
        let mut cmd = Self::ping_command(host.as_str());

        match timeout(self.ping_timeout, cmd.status()).await {
            Ok(Ok(status)) => {
                trace!(%host, ?status, "ping finished");
                status.success()
            }
            Ok(Err(e)) => {
                debug!(%host, error = %e, "failed to run ping");
                false
            }
            Err(_) => {
                trace!(%host, "ping timed out");
                false
            }
        }
    }

    async fn tcp_connect(&self, host: &Host, port: Port, connect_timeout: Duration) -> bool {
        match timeout(
            connect_timeout,
            TcpStream::connect((host.as_str(), port.as_u16())),
        )
        .await
        {
            Ok(Ok(stream)) => {
                drop(stream);
                trace!(%host, %port, "port open");
                true
            }
            Ok(Err(e)) => {
                trace!(%host, %port, error = %e, "connect failed");
                false
            }
            Err(_) => {
                trace!(%host, %port, "connect timed out");
                false
            }
        }
    }
}
