use std::sync::Arc;

use reqwest::Client;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::error::ValidationError;
use crate::metrics::{RequestResult, RequestSlot};

use super::execution::send_request;

/// Validated shape of a run: `steps` batches of `parallel` requests each.
#[derive(Debug, Clone)]
pub struct DispatchPlan {
    url: Arc<str>,
    parallel: usize,
    steps: usize,
    total_requests: usize,
}

impl DispatchPlan {
    /// # Errors
    ///
    /// Returns an error when `parallel * steps` overflows or exceeds the
    /// capacity a result channel can hold.
    pub fn new(url: &str, parallel: usize, steps: usize) -> Result<Self, ValidationError> {
        let total_requests = parallel
            .checked_mul(steps)
            .ok_or(ValidationError::RequestTotalOverflow { parallel, steps })?;
        if total_requests > Semaphore::MAX_PERMITS {
            return Err(ValidationError::RequestTotalTooLarge {
                total: total_requests,
                max: Semaphore::MAX_PERMITS,
            });
        }
        Ok(Self {
            url: Arc::from(url),
            parallel,
            steps,
            total_requests,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn shared_url(&self) -> Arc<str> {
        Arc::clone(&self.url)
    }

    #[must_use]
    pub const fn parallel(&self) -> usize {
        self.parallel
    }

    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub const fn total_requests(&self) -> usize {
        self.total_requests
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_requests == 0
    }

    /// Result channel able to hold every record of the run without blocking
    /// a sender. `None` for an empty plan.
    #[must_use]
    pub fn results_channel(
        &self,
    ) -> Option<(mpsc::Sender<RequestResult>, mpsc::Receiver<RequestResult>)> {
        if self.is_empty() {
            return None;
        }
        Some(mpsc::channel(self.total_requests))
    }
}

/// Runs every step in order. Within a step all requests run concurrently and
/// the next step starts only after each of them has finished, whatever the
/// outcome. Returns the number of requests launched.
///
/// `results_tx` is dropped on return, so the receiver sees the channel close
/// once the last record is in.
pub async fn dispatch_steps(
    client: &Client,
    plan: &DispatchPlan,
    results_tx: mpsc::Sender<RequestResult>,
) -> u64 {
    let parallel = u64::try_from(plan.parallel()).unwrap_or(u64::MAX);
    let steps = u64::try_from(plan.steps()).unwrap_or(u64::MAX);
    let mut launched: u64 = 0;

    info!(
        "Launching {} requests to {} ({} steps x {} parallel)",
        plan.total_requests(),
        plan.url(),
        steps,
        parallel
    );

    for step in 1..=steps {
        let mut tasks = JoinSet::new();

        for request_id_in_step in 1..=parallel {
            launched = launched.saturating_add(1);
            let slot = RequestSlot {
                overall_request_num: launched,
                step,
                request_id_in_step,
            };
            let client = client.clone();
            let url = plan.shared_url();
            let results_tx = results_tx.clone();

            tasks.spawn(async move {
                let result = send_request(&client, &url, slot).await;
                if results_tx.send(result).await.is_err() {
                    warn!(
                        "Result channel closed; dropped result for request {}.",
                        slot.overall_request_num
                    );
                }
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(err) = joined {
                error!("Request task in step {} did not complete: {}", step, err);
            }
        }
        debug!("Step {}/{} complete", step, steps);
    }

    launched
}
