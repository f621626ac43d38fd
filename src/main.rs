use std::sync::Arc;
use std::time::Duration;

use chainspeed::config::{chains, environment::Config};
use chainspeed::services::gas::{EvmGasPriceSource, GasPriceSampler, GasPriceSource};
use chainspeed::services::metrics::{MetricsRegistry, SamplerMetricsCollector};
use chainspeed::services::rpc::{BlockHeightProbe, ChainProbe, NodeHealthProbe};
use chainspeed::services::sampler::{LatencySampler, SamplerPolicy};
use chainspeed::services::transfer::TransferSimulator;
use chainspeed::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chainspeed=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load environment configuration");

    if config.alchemy_api_key.is_empty() {
        tracing::warn!("ALCHEMY_API_KEY not set; gas price probes will keep failing");
    }

    let metrics = MetricsRegistry::new().expect("Failed to build metrics registry");

    let chain_set = chains::default_chains();

    let read_probes: Vec<Arc<dyn ChainProbe>> = chain_set
        .iter()
        .cloned()
        .map(|chain| Arc::new(BlockHeightProbe::new(chain)) as Arc<dyn ChainProbe>)
        .collect();

    let health_probes: Vec<Arc<dyn ChainProbe>> = chain_set
        .iter()
        .cloned()
        .map(|chain| Arc::new(NodeHealthProbe::new(chain)) as Arc<dyn ChainProbe>)
        .collect();

    let gas_sources: Vec<Arc<dyn GasPriceSource>> = chains::gas_chains(&config.alchemy_api_key)
        .into_iter()
        .map(|chain| Arc::new(EvmGasPriceSource::new(chain)) as Arc<dyn GasPriceSource>)
        .collect();

    let read_sampler = Arc::new(LatencySampler::new(
        "read-calls",
        read_probes,
        SamplerPolicy::read_calls(config.read_interval_ms),
        Some(SamplerMetricsCollector::new(metrics.clone())),
    ));

    let health_sampler = Arc::new(LatencySampler::new(
        "node-health",
        health_probes,
        SamplerPolicy::node_health(config.health_interval_ms),
        Some(SamplerMetricsCollector::new(metrics.clone())),
    ));

    let gas_sampler = Arc::new(GasPriceSampler::new(
        gas_sources,
        Duration::from_millis(config.gas_interval_ms),
        Some(SamplerMetricsCollector::new(metrics.clone())),
    ));

    tokio::spawn(Arc::clone(&read_sampler).run());
    tokio::spawn(Arc::clone(&health_sampler).run());
    tokio::spawn(Arc::clone(&gas_sampler).run());
    tracing::info!("Samplers started for {} chains", chain_set.len());

    let state = Arc::new(AppState {
        chains: chain_set,
        read_sampler,
        health_sampler,
        gas_sampler,
        simulator: TransferSimulator::new(),
        metrics,
    });

    let app = chainspeed::create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await.unwrap();
    tracing::info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await.unwrap();
}
