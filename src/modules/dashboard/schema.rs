use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::gas::{GasSample, GasSnapshot};
use crate::services::sampler::{ChainAverage, SampleResult};
use crate::services::transfer::TransferOutcome;

#[derive(Debug, Serialize)]
pub struct LatencyRow {
    pub chain: String,
    pub label: String,
    /// "123ms", or "Error" for a failed probe
    pub response_time: String,
    pub elapsed_ms: u64,
    pub fastest: bool,
    pub error: Option<String>,
}

impl From<SampleResult> for LatencyRow {
    fn from(result: SampleResult) -> Self {
        let response_time = if result.success {
            format!("{}ms", result.elapsed_ms)
        } else {
            "Error".to_string()
        };
        Self {
            chain: result.chain,
            label: result.label,
            response_time,
            elapsed_ms: result.elapsed_ms,
            fastest: result.fastest,
            error: result.error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AverageRow {
    pub chain: String,
    pub label: String,
    pub average: String,
    pub average_ms: f64,
    pub samples: usize,
}

impl From<ChainAverage> for AverageRow {
    fn from(avg: ChainAverage) -> Self {
        Self {
            average: format!("{:.1}ms", avg.average_ms),
            chain: avg.chain,
            label: avg.label,
            average_ms: avg.average_ms,
            samples: avg.samples,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LatencyTableResponse {
    pub sampled_at: Option<DateTime<Utc>>,
    pub rows: Vec<LatencyRow>,
    pub averages: Vec<AverageRow>,
}

#[derive(Debug, Serialize)]
pub struct GasRow {
    pub chain: String,
    pub label: String,
    pub gas_price: String,
    pub cheapest: bool,
    pub error: Option<String>,
}

impl From<GasSample> for GasRow {
    fn from(sample: GasSample) -> Self {
        Self {
            chain: sample.chain,
            label: sample.label,
            gas_price: sample.gas_price,
            cheapest: sample.cheapest,
            error: sample.error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GasTableResponse {
    pub sampled_at: Option<DateTime<Utc>>,
    pub rows: Vec<GasRow>,
}

impl From<GasSnapshot> for GasTableResponse {
    fn from(snapshot: GasSnapshot) -> Self {
        Self {
            sampled_at: snapshot.sampled_at,
            rows: snapshot.results.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub chain: String,
}

#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub chain: String,
    pub statuses: Vec<String>,
    pub final_status: String,
    pub duration: String,
    pub gas_cost: String,
}

impl From<TransferOutcome> for TransferResponse {
    fn from(outcome: TransferOutcome) -> Self {
        Self {
            chain: outcome.chain,
            statuses: outcome.statuses,
            final_status: outcome.final_status,
            duration: outcome.duration,
            gas_cost: outcome.gas_cost,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardErrorResponse {
    pub error: String,
}

impl DashboardErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
