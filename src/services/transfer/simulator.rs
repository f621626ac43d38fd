use std::time::{Duration, Instant};

use serde::Serialize;

/// Fabricated gas-cost figure shown for every simulated transfer
pub const PLACEHOLDER_GAS_COST: &str = "0.002 ETH";

/// Result of one simulated transfer run
#[derive(Debug, Clone, Serialize)]
pub struct TransferOutcome {
    pub chain: String,
    pub statuses: Vec<String>,
    pub final_status: String,
    pub duration: String,
    pub gas_cost: String,
}

/// Walks through four fixed status messages with a fixed pause between each,
/// regardless of which network is selected, and fabricates a constant gas
/// cost. Performs no network call, no signing, no submission; there is no
/// transaction-execution logic here.
pub struct TransferSimulator {
    step_delay: Duration,
}

impl TransferSimulator {
    pub fn new() -> Self {
        Self {
            step_delay: Duration::from_secs(1),
        }
    }

    /// Shorter pauses for tests
    pub fn with_step_delay(step_delay: Duration) -> Self {
        Self { step_delay }
    }

    pub async fn simulate(&self, chain: &str) -> TransferOutcome {
        let start = Instant::now();

        let statuses = vec![
            format!("Initiating transaction on {}...", chain),
            "Transaction sent".to_string(),
            "Waiting for confirmation...".to_string(),
            "Transaction confirmed!".to_string(),
        ];

        for status in &statuses {
            tracing::info!(%chain, "{}", status);
            tokio::time::sleep(self.step_delay).await;
        }

        let duration = format!("{:.2} seconds", start.elapsed().as_secs_f64());

        TransferOutcome {
            chain: chain.to_string(),
            statuses,
            final_status: format!("Transaction successful on {}.", chain),
            duration,
            gas_cost: PLACEHOLDER_GAS_COST.to_string(),
        }
    }
}

impl Default for TransferSimulator {
    fn default() -> Self {
        Self::new()
    }
}
