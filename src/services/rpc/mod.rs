pub mod client;
pub mod probe;

pub use client::{JsonRpcClient, RpcError};
pub use probe::{BlockHeightProbe, ChainProbe, NodeHealthProbe};
