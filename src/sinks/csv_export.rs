use std::io;
use std::path::Path;

use tracing::error;

use crate::error::SinkError;
use crate::metrics::RequestResult;

pub const CSV_HEADER: [&str; 8] = [
    "OverallRequestNum",
    "Step",
    "RequestIDInStep",
    "URL",
    "Success",
    "HTTPStatusCode",
    "ErrorMsg",
    "DurationMillis",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportReport {
    pub rows_written: usize,
    pub row_errors: usize,
}

/// Writes the header and one row per result, in the given order.
/// The file is truncated if it already exists.
///
/// # Errors
///
/// Returns an error when the file cannot be created, the header cannot be
/// written, or the final flush fails. Individual row failures are logged and
/// counted in the report instead.
pub fn export_results_csv(path: &Path, results: &[RequestResult]) -> Result<ExportReport, SinkError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| SinkError::CreateCsv {
        path: path.to_path_buf(),
        source: err,
    })?;

    writer
        .write_record(CSV_HEADER)
        .map_err(|err| SinkError::WriteHeader { source: err })?;
    let report = write_rows(&mut writer, results);

    writer.flush().map_err(|err| SinkError::FlushCsv {
        path: path.to_path_buf(),
        source: err,
    })?;
    Ok(report)
}

/// Best effort: a failing row is reported and the next one is still attempted.
pub fn write_rows<W: io::Write>(
    writer: &mut csv::Writer<W>,
    results: &[RequestResult],
) -> ExportReport {
    let mut report = ExportReport::default();
    for result in results {
        match writer.write_record(row_fields(result)) {
            Ok(()) => report.rows_written = report.rows_written.saturating_add(1),
            Err(err) => {
                let err = SinkError::WriteRow {
                    request: result.overall_request_num,
                    source: err,
                };
                error!("{}", err);
                report.row_errors = report.row_errors.saturating_add(1);
            }
        }
    }
    report
}

fn row_fields(result: &RequestResult) -> [String; 8] {
    [
        result.overall_request_num.to_string(),
        result.step.to_string(),
        result.request_id_in_step.to_string(),
        result.url.clone(),
        result.success.to_string(),
        result.http_status_code.to_string(),
        result.error_msg.clone(),
        result.duration_millis().to_string(),
    ]
}
