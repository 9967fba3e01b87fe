//! Per-request result records and run-level aggregation.
mod collector;
mod types;


pub use collector::drain_results;
pub use types::{RequestOutcome, RequestResult, RequestSlot, RunSummary};
