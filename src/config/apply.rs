use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::StepArgs;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values passed on the
/// command line are never overridden.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut StepArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = url;
    }

    if !is_cli(matches, "parallel")
        && let Some(parallel) = config.parallel
    {
        args.parallel = parallel;
    }

    if !is_cli(matches, "steps")
        && let Some(steps) = config.steps
    {
        args.steps = steps;
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.as_deref()
    {
        if output.trim().is_empty() {
            return Err(invalid_field("output", ValidationError::OutputPathEmpty));
        }
        output.clone_into(&mut args.output);
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = Some(
            timeout
                .to_duration()
                .map_err(|err| invalid_field("timeout", err))?,
        );
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = Some(
            timeout
                .to_duration()
                .map_err(|err| invalid_field("connect_timeout", err))?,
        );
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn invalid_field(field: &'static str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidField { field, source })
}
