//! Scan report assembled from verification results.

use crate::scanner::{HostResult, Strategy};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Everything a finished scan produced, ready for rendering or export.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Target domain, or a label for host lists given directly.
    pub domain: String,
    /// Method name as given by the user.
    pub method: String,
    pub strategy: Strategy,
    pub candidates: usize,
    pub alive: usize,
    pub duration_ms: u64,
    pub generated_at: DateTime<Utc>,
    pub results: Vec<HostResult>,
}

impl ScanReport {
    pub fn new(
        domain: impl Into<String>,
        method: impl Into<String>,
        strategy: Strategy,
        results: Vec<HostResult>,
        elapsed: Duration,
    ) -> Self {
        Self {
            domain: domain.into(),
            method: method.into(),
            strategy,
            candidates: results.len(),
            alive: results.iter().filter(|r| r.alive).count(),
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            generated_at: Utc::now(),
            results,
        }
    }
}
