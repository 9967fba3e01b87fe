use std::error::Error;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;

use crate::metrics::{RequestOutcome, RequestResult, RequestSlot};

/// Sends one GET and classifies what happened. Never fails: every error ends
/// up inside the returned record.
pub(super) async fn send_request(client: &Client, url: &str, slot: RequestSlot) -> RequestResult {
    let start = Instant::now();

    let outcome = match client.get(url).send().await {
        Ok(response) => {
            let outcome = RequestOutcome::response(response.status());
            match drain_response_body(response).await {
                Ok(_) => outcome,
                Err(err) => outcome.with_body_read_failure(&error_chain(&err)),
            }
        }
        Err(err) => RequestOutcome::transport_failure(error_chain(&err)),
    };
    let duration = start.elapsed();

    if !outcome.success {
        debug!(
            "Request {} (step {}, #{}) failed after {:?}: {}",
            slot.overall_request_num,
            slot.step,
            slot.request_id_in_step,
            duration,
            outcome.error_msg
        );
    }

    RequestResult::new(slot, url, outcome, duration)
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}

/// Flattens an error and its sources into one line. The top-level reqwest
/// message rarely names the cause (refused, reset, dns).
pub(super) fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(source) = current {
        let text = source.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        current = source.source();
    }
    message
}
