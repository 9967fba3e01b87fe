//! Core library for the `stepload` CLI.
//!
//! The binary fires `steps` sequential batches of `parallel` concurrent GET
//! requests, waits for each batch to finish before starting the next, and
//! exports one CSV row per request. This crate exposes the building blocks:
//! CLI argument types, configuration loading, the step dispatcher, result
//! aggregation, and the CSV sink.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod sinks;
