use std::path::PathBuf;

use tokio::time::Instant;
use tracing::{error, warn};

use crate::args::StepArgs;
use crate::error::{AppError, AppResult};
use crate::http::{DispatchPlan, build_client, dispatch_steps};
use crate::metrics::{RequestResult, RunSummary, drain_results};
use crate::sinks::export_results_csv;

use super::summary::{NOTHING_TO_DO, export_complete_line, print_summary};

/// Dispatches every step, aggregates the results, prints the summary and
/// writes the CSV export. Returns `None` when there was nothing to launch.
///
/// # Errors
///
/// Returns an error for invalid run parameters or an unusable HTTP client.
/// Export failures are reported on the console and do not fail the run.
pub(crate) async fn run_local(args: &StepArgs) -> AppResult<Option<RunSummary>> {
    let plan =
        DispatchPlan::new(&args.url, args.parallel, args.steps).map_err(AppError::validation)?;
    let Some((results_tx, mut results_rx)) = plan.results_channel() else {
        println!("{}", NOTHING_TO_DO);
        return Ok(None);
    };
    let client = build_client(args.request_timeout, args.connect_timeout)?;

    let overall_start = Instant::now();
    let launched = dispatch_steps(&client, &plan, results_tx).await;
    let results = drain_results(&mut results_rx, plan.total_requests()).await;
    let overall_duration = overall_start.elapsed();

    let summary = RunSummary::from_results(
        usize::try_from(launched).unwrap_or(usize::MAX),
        &results,
        overall_duration,
    );
    let output = PathBuf::from(&args.output);
    print_summary(&summary, &output);
    export_results(output, results).await?;

    Ok(Some(summary))
}

async fn export_results(output: PathBuf, results: Vec<RequestResult>) -> AppResult<()> {
    let (output, export) = tokio::task::spawn_blocking(move || {
        let export = export_results_csv(&output, &results);
        (output, export)
    })
    .await?;

    match export {
        Ok(report) => {
            if report.row_errors > 0 {
                warn!(
                    "{} of {} rows could not be written to {}",
                    report.row_errors,
                    report.rows_written.saturating_add(report.row_errors),
                    output.display()
                );
            }
            println!("{}", export_complete_line(&output));
        }
        Err(err) => {
            println!("{}", err);
            error!("Results export to {} failed: {}", output.display(), err);
        }
    }
    Ok(())
}
