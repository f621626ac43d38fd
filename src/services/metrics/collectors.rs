use std::sync::Arc;

use super::MetricsRegistry;

/// Collector for sampler metrics
#[derive(Clone)]
pub struct SamplerMetricsCollector {
    metrics: Arc<MetricsRegistry>,
}

impl SamplerMetricsCollector {
    pub fn new(metrics: Arc<MetricsRegistry>) -> Self {
        Self { metrics }
    }

    pub fn record_probe(&self, sampler: &str, chain: &str, success: bool, elapsed_ms: u64) {
        let status = if success { "success" } else { "error" };
        self.metrics
            .probe_requests_total
            .with_label_values(&[sampler, chain, status])
            .inc();

        self.metrics
            .probe_duration_seconds
            .with_label_values(&[sampler, chain])
            .observe(elapsed_ms as f64 / 1000.0);

        self.metrics
            .chain_response_time_ms
            .with_label_values(&[sampler, chain])
            .set(elapsed_ms as f64);
    }

    pub fn record_cycle(&self, sampler: &str, outcome: &str) {
        self.metrics
            .sampler_cycles_total
            .with_label_values(&[sampler, outcome])
            .inc();
    }

    pub fn record_gas_sample(&self, chain: &str, gwei: Option<f64>) {
        match gwei {
            Some(price) => {
                self.metrics
                    .gas_price_gwei
                    .with_label_values(&[chain])
                    .set(price);
                self.metrics
                    .probe_requests_total
                    .with_label_values(&["gas-prices", chain, "success"])
                    .inc();
            }
            None => {
                self.metrics
                    .probe_requests_total
                    .with_label_values(&["gas-prices", chain, "error"])
                    .inc();
            }
        }
    }
}
