use tokio::sync::mpsc;
use tracing::warn;

use super::types::RequestResult;

/// Drains up to `expected` results, in arrival order.
///
/// Stops early only when every sender is gone, which means some task never
/// reported back; the shortfall is logged.
pub async fn drain_results(
    results_rx: &mut mpsc::Receiver<RequestResult>,
    expected: usize,
) -> Vec<RequestResult> {
    let mut results = Vec::with_capacity(expected);
    while results.len() < expected {
        match results_rx.recv().await {
            Some(result) => results.push(result),
            None => {
                warn!(
                    "Result channel closed after {} of {} results.",
                    results.len(),
                    expected
                );
                break;
            }
        }
    }
    results
}
