use std::time::Duration;

use reqwest::StatusCode;

/// Position of a request inside the run, fixed at launch time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestSlot {
    pub overall_request_num: u64,
    pub step: u64,
    pub request_id_in_step: u64,
}

/// Classification of a single request as it progresses from send to body read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOutcome {
    pub success: bool,
    pub http_status_code: u16,
    pub error_msg: String,
}

impl RequestOutcome {
    /// No response was received at all.
    #[must_use]
    pub const fn transport_failure(error_msg: String) -> Self {
        Self {
            success: false,
            http_status_code: 0,
            error_msg,
        }
    }

    /// A response arrived; only 2xx counts as a (tentative) success.
    #[must_use]
    pub fn response(status: StatusCode) -> Self {
        if status.is_success() {
            Self {
                success: true,
                http_status_code: status.as_u16(),
                error_msg: String::new(),
            }
        } else {
            Self {
                success: false,
                http_status_code: status.as_u16(),
                error_msg: format!("HTTP status {}", status),
            }
        }
    }

    /// Draining the body failed; forces failure and keeps any status message.
    #[must_use]
    pub fn with_body_read_failure(mut self, reason: &str) -> Self {
        self.success = false;
        if !self.error_msg.is_empty() {
            self.error_msg.push_str("; ");
        }
        self.error_msg.push_str("Error reading body: ");
        self.error_msg.push_str(reason);
        self
    }
}

/// One attempted request. Built once by the task that ran it and never mutated.
#[derive(Clone, Debug)]
pub struct RequestResult {
    pub overall_request_num: u64,
    pub step: u64,
    pub request_id_in_step: u64,
    pub url: String,
    pub success: bool,
    pub http_status_code: u16,
    pub error_msg: String,
    pub duration: Duration,
}

impl RequestResult {
    #[must_use]
    pub fn new(slot: RequestSlot, url: &str, outcome: RequestOutcome, duration: Duration) -> Self {
        Self {
            overall_request_num: slot.overall_request_num,
            step: slot.step,
            request_id_in_step: slot.request_id_in_step,
            url: url.to_owned(),
            success: outcome.success,
            http_status_code: outcome.http_status_code,
            error_msg: outcome.error_msg,
            duration,
        }
    }

    /// Whole milliseconds, truncated.
    #[must_use]
    pub const fn duration_millis(&self) -> u128 {
        self.duration.as_millis()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_launched: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub overall_duration: Duration,
}

impl RunSummary {
    #[must_use]
    pub fn from_results(
        total_launched: usize,
        results: &[RequestResult],
        overall_duration: Duration,
    ) -> Self {
        let successful_requests = results.iter().filter(|result| result.success).count();
        Self {
            total_launched,
            successful_requests,
            failed_requests: results.len().saturating_sub(successful_requests),
            overall_duration,
        }
    }
}
