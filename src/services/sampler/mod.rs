pub mod engine;
pub mod history;
pub mod types;

pub use engine::LatencySampler;
pub use history::RollingHistory;
pub use types::{
    ChainAverage, CycleOutcome, CycleSnapshot, FailureLatency, SampleResult, SamplerPolicy,
};
