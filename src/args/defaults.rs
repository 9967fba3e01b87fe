pub const DEFAULT_PARALLEL: usize = 100;
pub const DEFAULT_STEPS: usize = 10;
pub const DEFAULT_URL: &str = "http://localhost:4005/api/services";
pub const DEFAULT_OUTPUT: &str = "request_results.csv";

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("stepload/", env!("CARGO_PKG_VERSION"));
