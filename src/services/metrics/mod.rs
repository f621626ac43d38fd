pub mod collectors;
pub mod registry;

pub use collectors::SamplerMetricsCollector;
pub use registry::MetricsRegistry;
