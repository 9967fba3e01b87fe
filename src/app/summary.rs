use std::path::Path;

use crate::metrics::RunSummary;

pub(crate) const NOTHING_TO_DO: &str = "No requests to launch (parallel or steps is zero). Exiting.";

/// Console summary, in the order it is printed.
pub(crate) fn summary_lines(summary: &RunSummary, output: &Path) -> Vec<String> {
    vec![
        String::new(),
        "--- Overall Summary ---".to_owned(),
        format!("Total Requests Launched: {}", summary.total_launched),
        format!("Successful Requests:     {}", summary.successful_requests),
        format!("Failed Requests:         {}", summary.failed_requests),
        format!("Total Time Taken:        {:?}", summary.overall_duration),
        format!("Detailed per-request logs saved to: {}", output.display()),
    ]
}

pub(crate) fn print_summary(summary: &RunSummary, output: &Path) {
    for line in summary_lines(summary, output) {
        println!("{}", line);
    }
}

pub(crate) fn export_complete_line(output: &Path) -> String {
    format!("Results export to {} complete.", output.display())
}
