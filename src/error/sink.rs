use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Error creating CSV file '{path}': {source}")]
    CreateCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Error writing CSV header: {source}")]
    WriteHeader {
        #[source]
        source: csv::Error,
    },
    #[error("Error writing CSV row for request {request}: {source}")]
    WriteRow {
        request: u64,
        #[source]
        source: csv::Error,
    },
    #[error("Error flushing CSV file '{path}': {source}")]
    FlushCsv {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
