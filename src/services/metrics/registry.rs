use prometheus::{
    CounterVec, Encoder, GaugeVec, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Central metrics registry for the monitor
pub struct MetricsRegistry {
    registry: Registry,

    // Probe Metrics
    pub probe_requests_total: CounterVec,
    pub probe_duration_seconds: HistogramVec,
    pub chain_response_time_ms: GaugeVec,

    // Cycle Metrics
    pub sampler_cycles_total: CounterVec,

    // Gas Metrics
    pub gas_price_gwei: GaugeVec,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        let registry = Registry::new();

        let probe_requests_total = CounterVec::new(
            Opts::new("probe_requests_total", "Total RPC probes issued")
                .namespace("chainspeed"),
            &["sampler", "chain", "status"],
        )?;
        registry.register(Box::new(probe_requests_total.clone()))?;

        let probe_duration_seconds = HistogramVec::new(
            HistogramOpts::new("probe_duration_seconds", "RPC probe duration")
                .namespace("chainspeed")
                .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
            &["sampler", "chain"],
        )?;
        registry.register(Box::new(probe_duration_seconds.clone()))?;

        let chain_response_time_ms = GaugeVec::new(
            Opts::new(
                "chain_response_time_ms",
                "Last observed response time per chain",
            )
            .namespace("chainspeed"),
            &["sampler", "chain"],
        )?;
        registry.register(Box::new(chain_response_time_ms.clone()))?;

        let sampler_cycles_total = CounterVec::new(
            Opts::new(
                "sampler_cycles_total",
                "Poll cycles by outcome (committed, retained, skipped)",
            )
            .namespace("chainspeed"),
            &["sampler", "outcome"],
        )?;
        registry.register(Box::new(sampler_cycles_total.clone()))?;

        let gas_price_gwei = GaugeVec::new(
            Opts::new("gas_price_gwei", "Last observed gas price in Gwei")
                .namespace("chainspeed"),
            &["chain"],
        )?;
        registry.register(Box::new(gas_price_gwei.clone()))?;

        Ok(Arc::new(Self {
            registry,
            probe_requests_total,
            probe_duration_seconds,
            chain_response_time_ms,
            sampler_cycles_total,
            gas_price_gwei,
        }))
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Get the underlying registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
