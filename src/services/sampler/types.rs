use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One probe's outcome within a poll cycle
#[derive(Debug, Clone, Serialize)]
pub struct SampleResult {
    pub chain: String,
    pub label: String,
    pub elapsed_ms: u64,
    pub success: bool,
    pub error: Option<String>,
    pub fastest: bool,
}

/// The committed, displayed state of one sampler
/// Replaced wholesale on commit; untouched when a cycle is discarded
#[derive(Debug, Clone, Default, Serialize)]
pub struct CycleSnapshot {
    pub results: Vec<SampleResult>,
    pub sampled_at: Option<DateTime<Utc>>,
}

/// Rolling-average row for one chain
#[derive(Debug, Clone, Serialize)]
pub struct ChainAverage {
    pub chain: String,
    pub label: String,
    pub average_ms: f64,
    pub samples: usize,
}

/// What a single timer tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Fresh results committed to the snapshot
    Committed,
    /// Results discarded by the sanity guard; prior snapshot kept
    Retained,
    /// Previous cycle still in flight; no probes issued
    Skipped,
}

impl CycleOutcome {
    pub fn as_label(&self) -> &'static str {
        match self {
            CycleOutcome::Committed => "committed",
            CycleOutcome::Retained => "retained",
            CycleOutcome::Skipped => "skipped",
        }
    }
}

/// What a failed probe reports as its latency
/// The read and health tables intentionally differ here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureLatency {
    /// Time spent before the failure surfaced
    Elapsed,
    /// Forced zero; trips the commit guard so the prior snapshot survives
    Zero,
}

#[derive(Debug, Clone)]
pub struct SamplerPolicy {
    /// Timer period between cycles
    pub period: Duration,
    /// Per-probe timeout within a cycle
    pub probe_timeout: Duration,
    pub failure_latency: FailureLatency,
    /// Upper bound of the commit guard, exclusive; a cycle with any result
    /// at or above this (or at zero) is discarded
    pub max_credible_ms: u64,
}

pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_MAX_CREDIBLE_MS: u64 = 10_000;

impl SamplerPolicy {
    /// Policy of the read-call table: failures keep their elapsed time
    pub fn read_calls(period_ms: u64) -> Self {
        Self {
            period: Duration::from_millis(period_ms),
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            failure_latency: FailureLatency::Elapsed,
            max_credible_ms: DEFAULT_MAX_CREDIBLE_MS,
        }
    }

    /// Policy of the node-health table: any failure zeroes the sample,
    /// which keeps the previous snapshot on screen
    pub fn node_health(period_ms: u64) -> Self {
        Self {
            period: Duration::from_millis(period_ms),
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            failure_latency: FailureLatency::Zero,
            max_credible_ms: DEFAULT_MAX_CREDIBLE_MS,
        }
    }
}
