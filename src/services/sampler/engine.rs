use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures::future::join_all;
use tokio::sync::RwLock;
use tokio::time::{interval, timeout};

use crate::config::ChainInfo;
use crate::services::metrics::SamplerMetricsCollector;
use crate::services::rpc::{ChainProbe, RpcError};

use super::history::RollingHistory;
use super::types::{
    ChainAverage, CycleOutcome, CycleSnapshot, FailureLatency, SampleResult, SamplerPolicy,
};

const FASTEST_COUNT: usize = 3;

/// Polls every configured chain concurrently on a fixed period and keeps
/// the last committed ranking plus a bounded per-chain latency history
pub struct LatencySampler {
    name: &'static str,
    probes: Vec<Arc<dyn ChainProbe>>,
    policy: SamplerPolicy,
    snapshot: RwLock<CycleSnapshot>,
    history: RwLock<HashMap<String, RollingHistory>>,
    in_flight: AtomicBool,
    metrics: Option<SamplerMetricsCollector>,
}

impl LatencySampler {
    pub fn new(
        name: &'static str,
        probes: Vec<Arc<dyn ChainProbe>>,
        policy: SamplerPolicy,
        metrics: Option<SamplerMetricsCollector>,
    ) -> Self {
        Self {
            name,
            probes,
            policy,
            snapshot: RwLock::new(CycleSnapshot::default()),
            history: RwLock::new(HashMap::new()),
            in_flight: AtomicBool::new(false),
            metrics,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Latest committed snapshot
    pub async fn snapshot(&self) -> CycleSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Rolling averages, one row per chain with at least one recorded sample,
    /// in configured chain order
    pub async fn averages(&self) -> Vec<ChainAverage> {
        let history = self.history.read().await;
        self.probes
            .iter()
            .filter_map(|probe| {
                let chain = probe.chain();
                history
                    .get(&chain.name)
                    .filter(|h| !h.is_empty())
                    .map(|h| ChainAverage {
                        chain: chain.name.clone(),
                        label: chain.label(),
                        average_ms: h.average(),
                        samples: h.len(),
                    })
            })
            .collect()
    }

    /// One poll cycle: fan out all probes, join, rank, maybe commit
    ///
    /// At most one cycle runs at a time; a tick arriving while the previous
    /// cycle is still in flight is dropped, not deferred.
    pub async fn run_cycle(&self) -> CycleOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!(sampler = self.name, "previous cycle in flight, tick dropped");
            return CycleOutcome::Skipped;
        }

        let outcome = self.cycle_inner().await;
        self.in_flight.store(false, Ordering::SeqCst);

        if let Some(metrics) = &self.metrics {
            metrics.record_cycle(self.name, outcome.as_label());
        }
        outcome
    }

    async fn cycle_inner(&self) -> CycleOutcome {
        let probes = self.probes.iter().map(|probe| {
            let probe = Arc::clone(probe);
            let probe_timeout = self.policy.probe_timeout;
            let failure_latency = self.policy.failure_latency;
            async move { measure_probe(probe.as_ref(), probe_timeout, failure_latency).await }
        });

        let mut results = join_all(probes).await;

        if let Some(metrics) = &self.metrics {
            for result in &results {
                metrics.record_probe(self.name, &result.chain, result.success, result.elapsed_ms);
            }
        }

        results.sort_by_key(|r| r.elapsed_ms);
        flag_fastest(&mut results);

        // Sanity guard against spurious zero or runaway timings; not a retry,
        // the next tick simply samples again
        let credible = results
            .iter()
            .all(|r| r.elapsed_ms > 0 && r.elapsed_ms < self.policy.max_credible_ms);
        if !credible {
            tracing::warn!(
                sampler = self.name,
                "cycle discarded by sanity guard, keeping previous results"
            );
            return CycleOutcome::Retained;
        }

        {
            let mut history = self.history.write().await;
            for result in &results {
                // Failed samples are non-informative for the averages
                if result.success && result.elapsed_ms > 0 {
                    history
                        .entry(result.chain.clone())
                        .or_default()
                        .record(result.elapsed_ms);
                }
            }
        }

        let failed = results.iter().filter(|r| !r.success).count();
        tracing::debug!(
            sampler = self.name,
            chains = results.len(),
            failed,
            "cycle committed"
        );

        let mut snapshot = self.snapshot.write().await;
        snapshot.results = results;
        snapshot.sampled_at = Some(Utc::now());
        CycleOutcome::Committed
    }

    /// Poll forever on the policy period; the first cycle fires immediately
    pub async fn run(self: Arc<Self>) {
        let mut ticker = interval(self.policy.period);
        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }
}

async fn measure_probe(
    probe: &dyn ChainProbe,
    probe_timeout: std::time::Duration,
    failure_latency: FailureLatency,
) -> SampleResult {
    let chain = probe.chain();
    let start = Instant::now();
    let outcome = timeout(probe_timeout, probe.probe()).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(Ok(())) => SampleResult {
            chain: chain.name.clone(),
            label: chain.label(),
            elapsed_ms,
            success: true,
            error: None,
            fastest: false,
        },
        Ok(Err(err)) => failed_sample(chain, elapsed_ms, failure_latency, err),
        Err(_) => failed_sample(
            chain,
            elapsed_ms,
            failure_latency,
            RpcError::Timeout(probe_timeout.as_millis() as u64),
        ),
    }
}

fn failed_sample(
    chain: &ChainInfo,
    elapsed_ms: u64,
    failure_latency: FailureLatency,
    err: RpcError,
) -> SampleResult {
    tracing::debug!(chain = %chain.name, error = %err, "probe failed");
    let elapsed_ms = match failure_latency {
        FailureLatency::Elapsed => elapsed_ms,
        FailureLatency::Zero => 0,
    };
    SampleResult {
        chain: chain.name.clone(),
        label: chain.label(),
        elapsed_ms,
        success: false,
        error: Some(err.to_string()),
        fastest: false,
    }
}

/// Flag the lowest min(3, valid) results; expects `results` sorted ascending
fn flag_fastest(results: &mut [SampleResult]) {
    let mut flagged = 0;
    for result in results.iter_mut() {
        if flagged == FASTEST_COUNT {
            break;
        }
        if result.success {
            result.fastest = true;
            flagged += 1;
        }
    }
}
