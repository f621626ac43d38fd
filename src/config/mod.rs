pub mod chains;
pub mod environment;

pub use chains::{ChainInfo, ChainProtocol};
pub use environment::Config;
