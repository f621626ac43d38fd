use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Timed out after {0} ms")]
    Timeout(u64),
}

/// Minimal JSON-RPC 2.0 client over HTTP POST
/// Covers both the typed EVM read methods and the raw Solana methods
pub struct JsonRpcClient {
    client: reqwest::Client,
    url: String,
}

impl JsonRpcClient {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call_rpc<T: for<'de> Deserialize<'de>>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, RpcError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| RpcError::Network(e.to_string()))?;

        let rpc_response: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| RpcError::Parse(e.to_string()))?;

        if let Some(err) = rpc_response.error {
            return Err(RpcError::Rpc(err.message));
        }

        rpc_response
            .result
            .ok_or_else(|| RpcError::Parse("Missing result".to_string()))
    }

    /// Current block number via `eth_blockNumber`
    pub async fn block_number(&self) -> Result<u64, RpcError> {
        let hex: String = self.call_rpc("eth_blockNumber", json!([])).await?;
        parse_hex_quantity(&hex)
    }

    /// Current gas price in wei via `eth_gasPrice`
    pub async fn gas_price(&self) -> Result<u64, RpcError> {
        let hex: String = self.call_rpc("eth_gasPrice", json!([])).await?;
        parse_hex_quantity(&hex)
    }

    /// Node software version via `web3_clientVersion`
    pub async fn client_version(&self) -> Result<String, RpcError> {
        self.call_rpc("web3_clientVersion", json!([])).await
    }

    /// Solana block height via raw `getBlockHeight`
    pub async fn solana_block_height(&self) -> Result<u64, RpcError> {
        self.call_rpc("getBlockHeight", json!([])).await
    }

    /// Solana node liveness via raw `getHealth` (returns "ok" when healthy)
    pub async fn solana_health(&self) -> Result<String, RpcError> {
        self.call_rpc("getHealth", json!([])).await
    }
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObj>,
}

#[derive(Deserialize)]
struct RpcErrorObj {
    message: String,
}

fn parse_hex_quantity(hex: &str) -> Result<u64, RpcError> {
    u64::from_str_radix(hex.trim_start_matches("0x"), 16)
        .map_err(|e| RpcError::Parse(format!("Invalid hex quantity: {}", e)))
}
