use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;

use chainspeed::config::{ChainInfo, ChainProtocol};
use chainspeed::services::gas::{GasPriceSampler, GasPriceSource};
use chainspeed::services::metrics::MetricsRegistry;
use chainspeed::services::rpc::{ChainProbe, RpcError};
use chainspeed::services::sampler::{LatencySampler, SamplerPolicy};
use chainspeed::services::transfer::TransferSimulator;
use chainspeed::AppState;

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub fn test_chain(name: &str, chain_id: u64) -> ChainInfo {
    ChainInfo {
        name: name.to_string(),
        chain_id: Some(chain_id),
        protocol: ChainProtocol::Evm,
        rpc_url: format!("https://{}.example.com", name.to_lowercase()),
    }
}

/// Probe with a scripted delay and outcome, no network involved
#[allow(dead_code)]
pub struct ScriptedProbe {
    chain: ChainInfo,
    delay: Duration,
    fail: bool,
}

#[allow(dead_code)]
impl ScriptedProbe {
    pub fn ok(name: &str, chain_id: u64, delay_ms: u64) -> Arc<dyn ChainProbe> {
        Arc::new(Self {
            chain: test_chain(name, chain_id),
            delay: Duration::from_millis(delay_ms),
            fail: false,
        })
    }

    pub fn failing(name: &str, chain_id: u64, delay_ms: u64) -> Arc<dyn ChainProbe> {
        Arc::new(Self {
            chain: test_chain(name, chain_id),
            delay: Duration::from_millis(delay_ms),
            fail: true,
        })
    }

    /// Sleeps far past any test timeout, forcing the probe timeout to fire
    pub fn hanging(name: &str, chain_id: u64) -> Arc<dyn ChainProbe> {
        Arc::new(Self {
            chain: test_chain(name, chain_id),
            delay: Duration::from_secs(3600),
            fail: false,
        })
    }
}

#[async_trait]
impl ChainProbe for ScriptedProbe {
    fn chain(&self) -> &ChainInfo {
        &self.chain
    }

    async fn probe(&self) -> Result<(), RpcError> {
        tokio::time::sleep(self.delay).await;
        if self.fail {
            Err(RpcError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Probe that succeeds for the first N calls, then fails
#[allow(dead_code)]
pub struct FlakyProbe {
    chain: ChainInfo,
    delay: Duration,
    calls: AtomicUsize,
    fail_from: usize,
}

#[allow(dead_code)]
impl FlakyProbe {
    pub fn new(name: &str, chain_id: u64, delay_ms: u64, fail_from: usize) -> Arc<dyn ChainProbe> {
        Arc::new(Self {
            chain: test_chain(name, chain_id),
            delay: Duration::from_millis(delay_ms),
            calls: AtomicUsize::new(0),
            fail_from,
        })
    }
}

#[async_trait]
impl ChainProbe for FlakyProbe {
    fn chain(&self) -> &ChainInfo {
        &self.chain
    }

    async fn probe(&self) -> Result<(), RpcError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if call >= self.fail_from {
            Err(RpcError::Rpc("node went away".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Gas source with a scripted price
#[allow(dead_code)]
pub struct ScriptedGasSource {
    chain: ChainInfo,
    price_wei: Option<u64>,
}

#[allow(dead_code)]
impl ScriptedGasSource {
    pub fn priced(name: &str, chain_id: u64, price_wei: u64) -> Arc<dyn GasPriceSource> {
        Arc::new(Self {
            chain: test_chain(name, chain_id),
            price_wei: Some(price_wei),
        })
    }

    pub fn failing(name: &str, chain_id: u64) -> Arc<dyn GasPriceSource> {
        Arc::new(Self {
            chain: test_chain(name, chain_id),
            price_wei: None,
        })
    }
}

#[async_trait]
impl GasPriceSource for ScriptedGasSource {
    fn chain(&self) -> &ChainInfo {
        &self.chain
    }

    async fn gas_price_wei(&self) -> Result<u64, RpcError> {
        self.price_wei
            .ok_or_else(|| RpcError::Network("connection refused".to_string()))
    }
}

#[allow(dead_code)]
pub struct TestContext {
    pub server: TestServer,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestContext {
    /// App wired to scripted probes, with one committed cycle per sampler
    pub async fn new() -> Self {
        let chains = vec![
            test_chain("Alpha", 1),
            test_chain("Beta", 2),
            test_chain("Gamma", 3),
        ];

        let metrics = MetricsRegistry::new().expect("Failed to build metrics registry");

        let read_sampler = Arc::new(LatencySampler::new(
            "read-calls",
            vec![
                ScriptedProbe::ok("Alpha", 1, 30),
                ScriptedProbe::ok("Beta", 2, 10),
                ScriptedProbe::ok("Gamma", 3, 20),
            ],
            SamplerPolicy::read_calls(5_000),
            None,
        ));

        let health_sampler = Arc::new(LatencySampler::new(
            "node-health",
            vec![
                ScriptedProbe::ok("Alpha", 1, 10),
                ScriptedProbe::ok("Beta", 2, 10),
                ScriptedProbe::ok("Gamma", 3, 10),
            ],
            SamplerPolicy::node_health(10_000),
            None,
        ));

        let gas_sampler = Arc::new(GasPriceSampler::new(
            vec![
                ScriptedGasSource::priced("Alpha", 1, 30_000_000_000),
                ScriptedGasSource::priced("Beta", 2, 500_000_000),
                ScriptedGasSource::failing("Gamma", 3),
            ],
            Duration::from_millis(6_000),
            None,
        ));

        read_sampler.run_cycle().await;
        health_sampler.run_cycle().await;
        gas_sampler.run_cycle().await;

        let state = Arc::new(AppState {
            chains,
            read_sampler,
            health_sampler,
            gas_sampler,
            simulator: TransferSimulator::with_step_delay(Duration::from_millis(5)),
            metrics,
        });

        let app = chainspeed::create_app(Arc::clone(&state));
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, state }
    }
}
