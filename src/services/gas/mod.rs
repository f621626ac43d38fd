pub mod sampler;

pub use sampler::{EvmGasPriceSource, GasPriceSampler, GasPriceSource, GasSample, GasSnapshot};
