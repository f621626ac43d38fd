use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::interval;

use crate::config::ChainInfo;
use crate::services::metrics::SamplerMetricsCollector;
use crate::services::rpc::{JsonRpcClient, RpcError};

const CHEAPEST_COUNT: usize = 3;
const WEI_PER_GWEI: f64 = 1_000_000_000.0;

/// Where a chain's gas price comes from
#[async_trait]
pub trait GasPriceSource: Send + Sync {
    fn chain(&self) -> &ChainInfo;

    async fn gas_price_wei(&self) -> Result<u64, RpcError>;
}

/// `eth_gasPrice` against the chain's configured endpoint
pub struct EvmGasPriceSource {
    chain: ChainInfo,
    client: JsonRpcClient,
}

impl EvmGasPriceSource {
    pub fn new(chain: ChainInfo) -> Self {
        let client = JsonRpcClient::new(chain.rpc_url.clone());
        Self { chain, client }
    }
}

#[async_trait]
impl GasPriceSource for EvmGasPriceSource {
    fn chain(&self) -> &ChainInfo {
        &self.chain
    }

    async fn gas_price_wei(&self) -> Result<u64, RpcError> {
        self.client.gas_price().await
    }
}

/// One chain's row in the gas table
#[derive(Debug, Clone, Serialize)]
pub struct GasSample {
    pub chain: String,
    pub label: String,
    /// Formatted price ("12.3456 Gwei") or "Error"
    pub gas_price: String,
    pub gas_price_gwei: Option<f64>,
    pub error: Option<String>,
    pub cheapest: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GasSnapshot {
    pub results: Vec<GasSample>,
    pub sampled_at: Option<DateTime<Utc>>,
}

/// Polls gas prices across the EVM chains and keeps an ascending ranking
/// with the three cheapest flagged; failed rows sort last
///
/// Unlike the latency samplers this variant commits unconditionally and
/// keeps no history.
pub struct GasPriceSampler {
    sources: Vec<Arc<dyn GasPriceSource>>,
    period: Duration,
    snapshot: RwLock<GasSnapshot>,
    metrics: Option<SamplerMetricsCollector>,
}

impl GasPriceSampler {
    pub fn new(
        sources: Vec<Arc<dyn GasPriceSource>>,
        period: Duration,
        metrics: Option<SamplerMetricsCollector>,
    ) -> Self {
        Self {
            sources,
            period,
            snapshot: RwLock::new(GasSnapshot::default()),
            metrics,
        }
    }

    /// Latest committed snapshot
    pub async fn snapshot(&self) -> GasSnapshot {
        self.snapshot.read().await.clone()
    }

    /// One poll cycle: fetch all prices concurrently, rank, commit
    pub async fn run_cycle(&self) {
        let fetches = self.sources.iter().map(|source| {
            let source = Arc::clone(source);
            async move { fetch_gas_sample(source.as_ref()).await }
        });

        let mut results = join_all(fetches).await;

        if let Some(metrics) = &self.metrics {
            for result in &results {
                metrics.record_gas_sample(&result.chain, result.gas_price_gwei);
            }
        }

        results.sort_by(|a, b| compare_by_price(a, b));
        flag_cheapest(&mut results);

        let mut snapshot = self.snapshot.write().await;
        snapshot.results = results;
        snapshot.sampled_at = Some(Utc::now());
    }

    /// Poll forever on the configured period; the first cycle fires immediately
    pub async fn run(self: Arc<Self>) {
        let mut ticker = interval(self.period);
        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }
}

async fn fetch_gas_sample(source: &dyn GasPriceSource) -> GasSample {
    let chain = source.chain();
    match source.gas_price_wei().await {
        Ok(wei) => {
            let gwei = wei as f64 / WEI_PER_GWEI;
            GasSample {
                chain: chain.name.clone(),
                label: chain.label(),
                gas_price: format!("{:.4} Gwei", gwei),
                gas_price_gwei: Some(gwei),
                error: None,
                cheapest: false,
            }
        }
        Err(err) => {
            tracing::error!(chain = %chain.name, "gas price fetch failed: {}", err);
            GasSample {
                chain: chain.name.clone(),
                label: chain.label(),
                gas_price: "Error".to_string(),
                gas_price_gwei: None,
                error: Some(err.to_string()),
                cheapest: false,
            }
        }
    }
}

/// Ascending by price; failed rows (no price) always sort last
fn compare_by_price(a: &GasSample, b: &GasSample) -> Ordering {
    match (a.gas_price_gwei, b.gas_price_gwei) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Flag the first min(3, valid) rows; expects `results` sorted ascending
fn flag_cheapest(results: &mut [GasSample]) {
    for result in results.iter_mut().take(CHEAPEST_COUNT) {
        if result.gas_price_gwei.is_some() {
            result.cheapest = true;
        }
    }
}
