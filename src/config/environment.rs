use std::env;

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug)]
pub struct Config {
    pub bind_addr: String,
    pub alchemy_api_key: String,
    pub read_interval_ms: u64,
    pub gas_interval_ms: u64,
    pub health_interval_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        // A missing key is not a startup failure: the Alchemy URLs get an
        // empty key and the affected probes simply keep failing.
        let alchemy_api_key = env::var("ALCHEMY_API_KEY").unwrap_or_default();

        let read_interval_ms = interval_from_env("READ_CALL_INTERVAL_MS", 5_000)?;
        let gas_interval_ms = interval_from_env("GAS_PRICE_INTERVAL_MS", 6_000)?;
        let health_interval_ms = interval_from_env("NODE_HEALTH_INTERVAL_MS", 10_000)?;

        Ok(Self {
            bind_addr,
            alchemy_api_key,
            read_interval_ms,
            gas_interval_ms,
            health_interval_ms,
        })
    }
}

fn interval_from_env(var: &str, default_ms: u64) -> Result<u64, String> {
    match env::var(var) {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|_| format!("{} must be a number of milliseconds", var)),
        Err(_) => Ok(default_ms),
    }
}
