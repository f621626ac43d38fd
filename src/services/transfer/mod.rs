pub mod simulator;

pub use simulator::{TransferOutcome, TransferSimulator, PLACEHOLDER_GAS_COST};
