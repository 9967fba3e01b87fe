use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_OUTPUT, DEFAULT_PARALLEL, DEFAULT_STEPS, DEFAULT_URL};
use super::parsers::parse_duration_arg;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Step-batched HTTP GET load tester: fires parallel requests in sequential steps and exports a per-request CSV log."
)]
pub struct StepArgs {
    /// Number of parallel requests per step
    #[arg(long, short = 'p', default_value_t = DEFAULT_PARALLEL)]
    pub parallel: usize,

    /// Number of steps (batches) to run
    #[arg(long, short = 's', default_value_t = DEFAULT_STEPS)]
    pub steps: usize,

    /// Target URL for HTTP requests
    #[arg(long, short = 'u', default_value = DEFAULT_URL)]
    pub url: String,

    /// Path of the per-request CSV export (overwritten if it exists)
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Per-request timeout (supports ms/s/m/h). Unbounded when unset
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Connection timeout (supports ms/s/m/h). Unbounded when unset
    #[arg(long = "connect-timeout", value_parser = parse_duration_arg)]
    pub connect_timeout: Option<Duration>,

    /// Path to config file (TOML or JSON). Defaults to ./stepload.toml or ./stepload.json
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Enable debug logging (overridden by STEPLOAD_LOG or RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colours in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
