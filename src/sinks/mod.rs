//! Result export sinks.
mod csv_export;


pub use csv_export::export_results_csv;
