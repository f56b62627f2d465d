//! Verification engine.
//!
//! Decides which candidate hosts are alive, either by ping or by probing a
//! set of TCP ports. Hosts are verified concurrently under a hard ceiling;
//! ports within one host are probed without a ceiling.

pub mod ports;
pub mod probe;
pub mod strategy;
pub mod traits;

use crate::error::{VerifyError, VerifyResult};
use crate::types::Host;
use futures::stream::{FuturesUnordered, StreamExt};
use indicatif::ProgressBar;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, info};

pub use ports::scan_ports;
pub use probe::{SystemProber, DEFAULT_PROBE_TIMEOUT};
pub use strategy::{Strategy, TOP_100_PORTS, TOP_10_PORTS};
pub use traits::{HostResult, ProbeResult, Prober};

/// Default number of hosts verified at once.
pub const DEFAULT_CONCURRENCY: usize = 50;

/// Settings for one verification run.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Maximum number of hosts being verified at the same time.
    pub concurrency: usize,
    /// Connect timeout for each TCP probe.
    pub timeout: Duration,
    /// Advanced once per finished host.
    pub progress: Option<ProgressBar>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_PROBE_TIMEOUT,
            progress: None,
        }
    }
}

impl VerifyConfig {
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency,
            ..Self::default()
        }
    }

    /// Set the TCP connect timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Report progress on the given bar.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Reject settings no run could satisfy.
    pub fn validate(&self, strategy: &Strategy) -> VerifyResult<()> {
        if self.concurrency < 1 {
            return Err(VerifyError::InvalidConfiguration(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if matches!(strategy, Strategy::CustomPorts(ports) if ports.is_empty()) {
            return Err(VerifyError::InvalidConfiguration(
                "custom strategy requires at least one port".to_string(),
            ));
        }
        Ok(())
    }
}

/// Verify every host with `strategy`.
///
/// `result[i]` always describes `hosts[i]`, whatever order the checks finish
/// in. Duplicate hosts are checked independently. Network failures never
/// produce an error; the only error is an invalid configuration, which is
/// reported before any probe is sent.
pub async fn verify<P>(
    prober: &P,
    hosts: &[Host],
    strategy: &Strategy,
    config: &VerifyConfig,
) -> VerifyResult<Vec<HostResult>>
where
    P: Prober + ?Sized,
{
    config.validate(strategy)?;

    if hosts.is_empty() {
        return Ok(Vec::new());
    }

    info!(
        hosts = hosts.len(),
        concurrency = config.concurrency,
        %strategy,
        "verifying candidates"
    );

    // More permits than hosts would never be used, and Semaphore::new
    // panics above MAX_PERMITS.
    let permits = config
        .concurrency
        .min(hosts.len())
        .min(Semaphore::MAX_PERMITS);
    let gate = Semaphore::new(permits);

    let mut pending: FuturesUnordered<_> = hosts
        .iter()
        .enumerate()
        .map(|(idx, host)| {
            let gate = &gate;
            async move {
                let permit = gate.acquire().await.map_err(|_| VerifyError::GateClosed)?;
                let result = verify_host(prober, host, strategy, config.timeout).await;
                drop(permit);
                Ok::<_, VerifyError>((idx, result))
            }
        })
        .collect();

    let mut slots: Vec<Option<HostResult>> = vec![None; hosts.len()];

    while let Some(outcome) = pending.next().await {
        let (idx, result) = outcome?;
        debug!(host = %result.host, alive = result.alive, open = ?result.open_ports, "host verified");
        if let Some(ref pb) = config.progress {
            pb.inc(1);
            if result.alive {
                pb.set_message(format!("alive: {}", result.host));
            }
        }
        slots[idx] = Some(result);
    }

    let results: Vec<HostResult> = slots.into_iter().flatten().collect();
    debug_assert_eq!(results.len(), hosts.len());

    info!(
        alive = results.iter().filter(|r| r.alive).count(),
        total = results.len(),
        "verification complete"
    );

    Ok(results)
}

async fn verify_host<P>(prober: &P, host: &Host, strategy: &Strategy, timeout: Duration) -> HostResult
where
    P: Prober + ?Sized,
{
    match strategy {
        Strategy::Ping => HostResult::from_ping(host.clone(), prober.ping(host).await),
        Strategy::FixedPorts(ports) | Strategy::CustomPorts(ports) => {
            let open = scan_ports(prober, host, ports, timeout).await;
            HostResult::from_open_ports(host.clone(), open)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Port;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};

    /// Scripted prober that records how many hosts are in flight at once.
    #[derive(Default)]
    struct MockProber {
        ping_ok: Vec<&'static str>,
        open: HashMap<&'static str, Vec<u16>>,
        delay: Duration,
        calls: AtomicUsize,
        in_flight: Mutex<HashMap<String, usize>>,
        max_in_flight: AtomicUsize,
    }

    impl MockProber {
        fn enter(&self, host: &Host) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut in_flight = self.in_flight.lock().unwrap();
            *in_flight.entry(host.to_string()).or_default() += 1;
            self.max_in_flight
                .fetch_max(in_flight.len(), Ordering::SeqCst);
        }

        fn leave(&self, host: &Host) {
            let mut in_flight = self.in_flight.lock().unwrap();
            let key = host.to_string();
            if let Some(count) = in_flight.get_mut(&key) {
                *count -= 1;
                if *count == 0 {
                    in_flight.remove(&key);
                }
            }
        }
    }

    #[async_trait]
    impl Prober for MockProber {
        async fn ping(&self, host: &Host) -> bool {
            self.enter(host);
            tokio::time::sleep(self.delay).await;
            self.leave(host);
            self.ping_ok.iter().any(|&h| h == host.as_str())
        }

        async fn tcp_connect(&self, host: &Host, port: Port, _timeout: Duration) -> bool {
            self.enter(host);
            tokio::time::sleep(self.delay).await;
            self.leave(host);
            self.open
                .get(host.as_str())
                .is_some_and(|ports| ports.contains(&port.as_u16()))
        }
    }

    fn hosts(names: &[&str]) -> Vec<Host> {
        names.iter().map(|&n| Host::new(n)).collect()
    }

    fn ports(values: &[u16]) -> Vec<Port> {
        values.iter().map(|&v| Port::new(v).unwrap()).collect()
    }

    #[tokio::test]
    async fn test_fixed_ports_scenario() {
        let prober = MockProber {
            open: HashMap::from([("a.example.com", vec![80])]),
            ..Default::default()
        };
        let input = hosts(&["a.example.com", "b.example.com"]);

        let results = verify(
            &prober,
            &input,
            &Strategy::FixedPorts(ports(&[80, 443])),
            &VerifyConfig::new(10),
        )
        .await
        .unwrap();

        assert_eq!(
            results,
            vec![
                HostResult {
                    host: Host::new("a.example.com"),
                    alive: true,
                    open_ports: ports(&[80]),
                },
                HostResult {
                    host: Host::new("b.example.com"),
                    alive: false,
                    open_ports: vec![],
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_ping_scenario() {
        let prober = MockProber {
            ping_ok: vec!["x"],
            ..Default::default()
        };

        let results = verify(&prober, &hosts(&["x"]), &Strategy::Ping, &VerifyConfig::new(1))
            .await
            .unwrap();

        assert_eq!(results, vec![HostResult::from_ping(Host::new("x"), true)]);
    }

    #[tokio::test]
    async fn test_empty_host_list() {
        let prober = MockProber::default();

        for strategy in [
            Strategy::Ping,
            Strategy::FixedPorts(ports(&[80])),
            Strategy::CustomPorts(ports(&[22])),
        ] {
            let results = assert_ok!(verify(&prober, &[], &strategy, &VerifyConfig::new(1)).await);
            assert!(results.is_empty());
        }
        assert_eq!(prober.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_custom_ports_rejected_before_probing() {
        let prober = MockProber::default();

        let err = assert_err!(
            verify(
                &prober,
                &hosts(&["a", "b"]),
                &Strategy::CustomPorts(vec![]),
                &VerifyConfig::new(5),
            )
            .await
        );

        assert_eq!(
            err,
            VerifyError::InvalidConfiguration(
                "custom strategy requires at least one port".to_string()
            )
        );
        assert_eq!(prober.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_concurrency_rejected() {
        let prober = MockProber::default();

        for strategy in [Strategy::Ping, Strategy::FixedPorts(ports(&[80]))] {
            let err = assert_err!(
                verify(&prober, &hosts(&["a"]), &strategy, &VerifyConfig::new(0)).await
            );
            assert!(matches!(err, VerifyError::InvalidConfiguration(_)));
        }
        assert_eq!(prober.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_method_reports_everything_dead() {
        let prober = MockProber {
            open: HashMap::from([("a", vec![80])]),
            ..Default::default()
        };
        let strategy = Strategy::from_method("bogus", &[]);

        let results = verify(&prober, &hosts(&["a", "b"]), &strategy, &VerifyConfig::new(2))
            .await
            .unwrap();

        assert!(results.iter().all(|r| !r.alive && r.open_ports.is_empty()));
        assert_eq!(prober.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_duplicates_are_verified_independently() {
        let prober = MockProber {
            ping_ok: vec!["dup"],
            ..Default::default()
        };

        let results = verify(
            &prober,
            &hosts(&["dup", "dup"]),
            &Strategy::Ping,
            &VerifyConfig::new(4),
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.host.as_str() == "dup" && r.alive));
        assert_eq!(prober.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_order_and_invariants_hold_for_many_hosts() {
        let names: Vec<String> = (0..100).map(|i| format!("h{i}.example.com")).collect();
        let input: Vec<Host> = names.iter().map(Host::new).collect();
        let prober = MockProber {
            ping_ok: vec!["h3.example.com"],
            open: HashMap::from([
                ("h7.example.com", vec![443, 22]),
                ("h42.example.com", vec![8080]),
            ]),
            delay: Duration::from_millis(10),
            ..Default::default()
        };

        for strategy in [Strategy::Ping, Strategy::FixedPorts(ports(&[22, 80, 443, 8080]))] {
            let results = verify(&prober, &input, &strategy, &VerifyConfig::new(7))
                .await
                .unwrap();

            assert_eq!(results.len(), input.len());
            for (result, host) in results.iter().zip(&input) {
                assert_eq!(&result.host, host);
                if strategy.is_ping() {
                    assert!(result.open_ports.is_empty());
                } else {
                    assert_eq!(result.alive, !result.open_ports.is_empty());
                }
            }

            if strategy.is_ping() {
                assert!(results[3].alive);
            } else {
                assert_eq!(results[7].open_ports, ports(&[22, 443]));
                assert_eq!(results[42].open_ports, ports(&[8080]));
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrency_ceiling() {
        let input: Vec<Host> = (0..100).map(|i| Host::new(format!("host{i}"))).collect();

        for concurrency in [1, 5, 50] {
            for strategy in [Strategy::Ping, Strategy::FixedPorts(ports(&[80, 443, 8080]))] {
                let prober = MockProber {
                    delay: Duration::from_millis(20),
                    ..Default::default()
                };

                verify(&prober, &input, &strategy, &VerifyConfig::new(concurrency))
                    .await
                    .unwrap();

                let max = prober.max_in_flight.load(Ordering::SeqCst);
                assert!(
                    max <= concurrency,
                    "{max} hosts in flight with concurrency {concurrency}"
                );
                assert_eq!(max, concurrency, "ceiling should be reached");
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_order_ignores_completion_order() {
        struct SlowFirst;

        #[async_trait]
        impl Prober for SlowFirst {
            async fn ping(&self, host: &Host) -> bool {
                let delay = if host.as_str() == "slow" { 500 } else { 1 };
                tokio::time::sleep(Duration::from_millis(delay)).await;
                host.as_str() != "fast-dead"
            }

            async fn tcp_connect(&self, _: &Host, _: Port, _: Duration) -> bool {
                false
            }
        }

        let results = verify(
            &SlowFirst,
            &hosts(&["slow", "fast", "fast-dead"]),
            &Strategy::Ping,
            &VerifyConfig::new(3),
        )
        .await
        .unwrap();

        let order: Vec<_> = results.iter().map(|r| (r.host.as_str(), r.alive)).collect();
        assert_eq!(order, vec![("slow", true), ("fast", true), ("fast-dead", false)]);
    }

    #[tokio::test]
    async fn test_huge_concurrency_is_capped() {
        let prober = MockProber {
            ping_ok: vec!["a"],
            ..Default::default()
        };

        let results = assert_ok!(
            verify(
                &prober,
                &hosts(&["a", "b"]),
                &Strategy::Ping,
                &VerifyConfig::new(usize::MAX),
            )
            .await
        );

        assert_eq!(
            results,
            vec![
                HostResult::from_ping(Host::new("a"), true),
                HostResult::from_ping(Host::new("b"), false),
            ]
        );
    }

    #[test]
    fn test_config_builder() {
        let config = VerifyConfig::new(8).with_timeout(Duration::from_millis(750));
        assert_eq!(config.concurrency, 8);
        assert_eq!(config.timeout, Duration::from_millis(750));
        assert!(config.progress.is_none());
        assert_eq!(VerifyConfig::default().concurrency, DEFAULT_CONCURRENCY);
    }
}
