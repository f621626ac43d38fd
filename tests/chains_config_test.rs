use chainspeed::config::chains::{alchemy_url, default_chains, find_chain, gas_chains};
use chainspeed::config::environment::Config;
use serial_test::serial;

// =============================================================================
// INTEGRATION TESTS - CHAIN REGISTRY & ENVIRONMENT
// =============================================================================

#[serial]
#[test]
fn test_default_registry_contents() {
    std::env::remove_var("ETH_RPC_URL");

    let chains = default_chains();
    assert_eq!(chains.len(), 10);

    let eth = find_chain(&chains, "Ethereum").unwrap();
    assert_eq!(eth.chain_id, Some(1));
    assert!(eth.rpc_url.starts_with("https://"));

    let sol = find_chain(&chains, "Solana").unwrap();
    assert_eq!(sol.label(), "Solana (101)");
}

#[serial]
#[test]
fn test_env_override_replaces_default_url() {
    std::env::set_var("ETH_RPC_URL", "https://my-private-node.internal:8545");

    let chains = default_chains();
    let eth = find_chain(&chains, "Ethereum").unwrap();
    assert_eq!(eth.rpc_url, "https://my-private-node.internal:8545");

    std::env::remove_var("ETH_RPC_URL");
}

#[serial]
#[test]
fn test_missing_alchemy_key_degrades_to_broken_url() {
    // An empty key produces an unreachable URL, not a panic or a startup error
    let chains = gas_chains("");
    assert_eq!(chains.len(), 8);
    for chain in &chains {
        assert!(chain.rpc_url.ends_with("/v2/"));
    }
}

#[serial]
#[test]
fn test_alchemy_url_substitution() {
    assert_eq!(
        alchemy_url("eth-mainnet", "secret"),
        "https://eth-mainnet.g.alchemy.com/v2/secret"
    );
}

#[serial]
#[test]
fn test_config_defaults() {
    std::env::remove_var("BIND_ADDR");
    std::env::remove_var("ALCHEMY_API_KEY");
    std::env::remove_var("READ_CALL_INTERVAL_MS");
    std::env::remove_var("GAS_PRICE_INTERVAL_MS");
    std::env::remove_var("NODE_HEALTH_INTERVAL_MS");

    let config = Config::from_env().unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:3000");
    assert_eq!(config.read_interval_ms, 5_000);
    assert_eq!(config.gas_interval_ms, 6_000);
    assert_eq!(config.health_interval_ms, 10_000);
}

#[serial]
#[test]
fn test_config_rejects_garbage_interval() {
    std::env::set_var("READ_CALL_INTERVAL_MS", "not-a-number");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("READ_CALL_INTERVAL_MS"));

    std::env::remove_var("READ_CALL_INTERVAL_MS");
}

#[serial]
#[test]
fn test_config_interval_override() {
    std::env::set_var("READ_CALL_INTERVAL_MS", "2500");

    let config = Config::from_env().unwrap();
    assert_eq!(config.read_interval_ms, 2_500);

    std::env::remove_var("READ_CALL_INTERVAL_MS");
}
