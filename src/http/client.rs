use std::time::Duration;

use reqwest::Client;
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the shared HTTP client. No timeout is applied unless one is given.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(
    request_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
) -> AppResult<Client> {
    let mut client_builder = Client::builder().user_agent(DEFAULT_USER_AGENT);

    if let Some(timeout) = request_timeout {
        client_builder = client_builder.timeout(timeout);
    }
    if let Some(timeout) = connect_timeout {
        client_builder = client_builder.connect_timeout(timeout);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}
