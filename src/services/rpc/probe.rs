use async_trait::async_trait;

use crate::config::{ChainInfo, ChainProtocol};

use super::client::{JsonRpcClient, RpcError};

/// One measurable operation against one chain's endpoint
/// Implementations pick the method by protocol family
#[async_trait]
pub trait ChainProbe: Send + Sync {
    fn chain(&self) -> &ChainInfo;

    async fn probe(&self) -> Result<(), RpcError>;
}

/// Block-height read: `eth_blockNumber` for EVM chains,
/// raw `getBlockHeight` POST for Solana
pub struct BlockHeightProbe {
    chain: ChainInfo,
    client: JsonRpcClient,
}

impl BlockHeightProbe {
    pub fn new(chain: ChainInfo) -> Self {
        let client = JsonRpcClient::new(chain.rpc_url.clone());
        Self { chain, client }
    }
}

#[async_trait]
impl ChainProbe for BlockHeightProbe {
    fn chain(&self) -> &ChainInfo {
        &self.chain
    }

    async fn probe(&self) -> Result<(), RpcError> {
        match self.chain.protocol {
            ChainProtocol::Evm => {
                self.client.block_number().await?;
            }
            ChainProtocol::Solana => {
                self.client.solana_block_height().await?;
            }
        }
        Ok(())
    }
}

/// Node liveness read: `web3_clientVersion` for EVM chains,
/// raw `getHealth` POST for Solana
pub struct NodeHealthProbe {
    chain: ChainInfo,
    client: JsonRpcClient,
}

impl NodeHealthProbe {
    pub fn new(chain: ChainInfo) -> Self {
        let client = JsonRpcClient::new(chain.rpc_url.clone());
        Self { chain, client }
    }
}

#[async_trait]
impl ChainProbe for NodeHealthProbe {
    fn chain(&self) -> &ChainInfo {
        &self.chain
    }

    async fn probe(&self) -> Result<(), RpcError> {
        match self.chain.protocol {
            ChainProtocol::Evm => {
                self.client.client_version().await?;
            }
            ChainProtocol::Solana => {
                self.client.solana_health().await?;
            }
        }
        Ok(())
    }
}
