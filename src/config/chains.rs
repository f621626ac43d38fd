use serde::{Deserialize, Serialize};

/// Wire protocol family of a chain's RPC endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChainProtocol {
    /// Ethereum-compatible chains (typed JSON-RPC read methods)
    Evm,

    /// Solana (raw JSON-RPC POST, different method names)
    Solana,
}

/// A monitored chain bound to one fixed RPC endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainInfo {
    pub name: String,
    pub chain_id: Option<u64>,
    pub protocol: ChainProtocol,
    pub rpc_url: String,
}

impl ChainInfo {
    /// Display label, e.g. "Ethereum (1)"
    pub fn label(&self) -> String {
        match self.chain_id {
            Some(id) => format!("{} ({})", self.name, id),
            None => format!("{} (Unknown ID)", self.name),
        }
    }
}

/// Load the monitored chain set from environment variables
/// Each chain has a public default RPC URL and a per-chain override
pub fn default_chains() -> Vec<ChainInfo> {
    vec![
        evm_chain("Ethereum", 1, "ETH_RPC_URL", "https://eth.llamarpc.com"),
        evm_chain("Base", 8453, "BASE_RPC_URL", "https://mainnet.base.org"),
        evm_chain("Arbitrum", 42161, "ARBITRUM_RPC_URL", "https://arb1.arbitrum.io/rpc"),
        evm_chain("Optimism", 10, "OPTIMISM_RPC_URL", "https://mainnet.optimism.io"),
        evm_chain("Polygon", 137, "POLYGON_RPC_URL", "https://polygon-rpc.com"),
        evm_chain(
            "BinanceSmartChain",
            56,
            "BSC_RPC_URL",
            "https://bsc-dataseed.binance.org",
        ),
        evm_chain(
            "Avalanche",
            43114,
            "AVALANCHE_RPC_URL",
            "https://api.avax.network/ext/bc/C/rpc",
        ),
        evm_chain("Fantom", 250, "FANTOM_RPC_URL", "https://rpc.ftm.tools"),
        evm_chain("Celo", 42220, "CELO_RPC_URL", "https://forno.celo.org"),
        ChainInfo {
            name: "Solana".to_string(),
            chain_id: Some(101),
            protocol: ChainProtocol::Solana,
            rpc_url: env_or("SOLANA_RPC_URL", "https://api.mainnet-beta.solana.com"),
        },
    ]
}

/// Chains sampled for gas prices: the Alchemy-served EVM networks
/// (no Celo, no Solana)
pub fn gas_chains(api_key: &str) -> Vec<ChainInfo> {
    const ALCHEMY_NETWORKS: [(&str, u64, &str); 8] = [
        ("Ethereum", 1, "eth-mainnet"),
        ("Base", 8453, "base-mainnet"),
        ("Arbitrum", 42161, "arb-mainnet"),
        ("Optimism", 10, "opt-mainnet"),
        ("Polygon", 137, "polygon-mainnet"),
        ("BinanceSmartChain", 56, "bnb-mainnet"),
        ("Avalanche", 43114, "avax-mainnet"),
        ("Fantom", 250, "fantom-mainnet"),
    ];

    ALCHEMY_NETWORKS
        .iter()
        .map(|(name, id, network)| ChainInfo {
            name: (*name).to_string(),
            chain_id: Some(*id),
            protocol: ChainProtocol::Evm,
            rpc_url: alchemy_url(network, api_key),
        })
        .collect()
}

/// Build an Alchemy endpoint URL for a network slug
pub fn alchemy_url(network: &str, api_key: &str) -> String {
    format!("https://{}.g.alchemy.com/v2/{}", network, api_key)
}

/// Look up a configured chain by display name
pub fn find_chain<'a>(chains: &'a [ChainInfo], name: &str) -> Option<&'a ChainInfo> {
    chains.iter().find(|c| c.name == name)
}

fn evm_chain(name: &str, chain_id: u64, env_var: &str, default_url: &str) -> ChainInfo {
    ChainInfo {
        name: name.to_string(),
        chain_id: Some(chain_id),
        protocol: ChainProtocol::Evm,
        rpc_url: env_or(env_var, default_url),
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chains_cover_all_networks() {
        let chains = default_chains();
        assert_eq!(chains.len(), 10);
        assert!(find_chain(&chains, "Ethereum").is_some());
        assert!(find_chain(&chains, "Solana").is_some());
        assert!(find_chain(&chains, "Dogecoin").is_none());
    }

    #[test]
    fn test_solana_is_the_only_non_evm_chain() {
        let chains = default_chains();
        let non_evm: Vec<_> = chains
            .iter()
            .filter(|c| c.protocol != ChainProtocol::Evm)
            .collect();
        assert_eq!(non_evm.len(), 1);
        assert_eq!(non_evm[0].name, "Solana");
        assert_eq!(non_evm[0].chain_id, Some(101));
    }

    #[test]
    fn test_label_format() {
        let chains = default_chains();
        let eth = find_chain(&chains, "Ethereum").unwrap();
        assert_eq!(eth.label(), "Ethereum (1)");

        let unknown = ChainInfo {
            name: "Mystery".to_string(),
            chain_id: None,
            protocol: ChainProtocol::Evm,
            rpc_url: "https://example.com".to_string(),
        };
        assert_eq!(unknown.label(), "Mystery (Unknown ID)");
    }

    #[test]
    fn test_gas_chains_exclude_celo_and_solana() {
        let chains = gas_chains("test-key");
        assert_eq!(chains.len(), 8);
        assert!(find_chain(&chains, "Celo").is_none());
        assert!(find_chain(&chains, "Solana").is_none());
        for chain in &chains {
            assert!(chain.rpc_url.ends_with("/v2/test-key"));
        }
    }
}
