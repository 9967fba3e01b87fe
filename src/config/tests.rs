use super::{
    apply_config, load_config_file,
    types::{ConfigFile, DurationValue},
};
use clap::{CommandFactory, FromArgMatches};
use std::time::Duration;
use tempfile::tempdir;

use crate::args::StepArgs;
use crate::error::{AppError, ConfigError};

fn parse_cli(raw: &[&str]) -> Result<(StepArgs, clap::ArgMatches), String> {
    let matches = StepArgs::command()
        .try_get_matches_from(raw)
        .map_err(|err| format!("parse failed: {}", err))?;
    let args = StepArgs::from_arg_matches(&matches).map_err(|err| format!("{}", err))?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("stepload.toml");
    let content = r#"
url = "http://localhost:3000/health"
parallel = 25
steps = 4
output = "runs/latest.csv"
timeout = "750ms"
connect_timeout = 3
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.url.as_deref() != Some("http://localhost:3000/health") {
        return Err("Unexpected url".to_owned());
    }
    if config.parallel != Some(25) || config.steps != Some(4) {
        return Err("Unexpected parallel/steps".to_owned());
    }
    if config.output.as_deref() != Some("runs/latest.csv") {
        return Err("Unexpected output".to_owned());
    }
    if !matches!(config.timeout, Some(DurationValue::Text(ref text)) if text == "750ms") {
        return Err("Unexpected timeout".to_owned());
    }
    if !matches!(config.connect_timeout, Some(DurationValue::Seconds(3))) {
        return Err("Unexpected connect_timeout".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("stepload.json");
    let content = r#"{ "url": "http://localhost:3000", "parallel": 2, "verbose": true }"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.parallel != Some(2) {
        return Err("Unexpected parallel".to_owned());
    }
    if config.verbose != Some(true) {
        return Err("Unexpected verbose".to_owned());
    }
    if config.steps.is_some() {
        return Err("Expected steps to be unset".to_owned());
    }
    Ok(())
}

#[test]
fn unknown_config_keys_are_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("stepload.toml");
    std::fs::write(&path, "method = \"post\"\n").map_err(|err| format!("write failed: {}", err))?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected parse failure".to_owned()),
    }
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("stepload.yaml");
    std::fs::write(&path, "url: x\n").map_err(|err| format!("write failed: {}", err))?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => {
            Ok(())
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected unsupported extension".to_owned()),
    }
}

#[test]
fn missing_config_file_reports_read_error() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("absent.toml");

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ReadConfig { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected read failure".to_owned()),
    }
}

#[test]
fn config_fills_values_not_given_on_cli() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&["stepload", "--steps", "3"])?;
    let config = ConfigFile {
        url: Some("http://config.test/".to_owned()),
        parallel: Some(8),
        steps: Some(99),
        output: Some("config.csv".to_owned()),
        timeout: Some(DurationValue::Seconds(5)),
        connect_timeout: Some(DurationValue::Text("200ms".to_owned())),
        verbose: Some(true),
        no_color: Some(true),
    };

    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.url != "http://config.test/" {
        return Err("Expected url from config".to_owned());
    }
    if args.parallel != 8 {
        return Err("Expected parallel from config".to_owned());
    }
    if args.steps != 3 {
        return Err("Expected CLI steps to win over config".to_owned());
    }
    if args.output != "config.csv" {
        return Err("Expected output from config".to_owned());
    }
    if args.request_timeout != Some(Duration::from_secs(5)) {
        return Err("Expected timeout from config".to_owned());
    }
    if args.connect_timeout != Some(Duration::from_millis(200)) {
        return Err("Expected connect_timeout from config".to_owned());
    }
    if !args.verbose || !args.no_color {
        return Err("Expected verbose/no_color from config".to_owned());
    }
    Ok(())
}

#[test]
fn config_zero_timeout_is_rejected() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&["stepload"])?;
    let config = ConfigFile {
        timeout: Some(DurationValue::Seconds(0)),
        ..ConfigFile::default()
    };

    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::InvalidField { field, .. })) if field == "timeout" => {
            Ok(())
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(()) => Err("Expected invalid timeout".to_owned()),
    }
}

#[test]
fn config_empty_output_is_rejected() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&["stepload"])?;
    let config = ConfigFile {
        output: Some("  ".to_owned()),
        ..ConfigFile::default()
    };

    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err("Expected empty output to be rejected".to_owned());
    }
    if args.output != "request_results.csv" {
        return Err("Expected output to stay at default".to_owned());
    }
    Ok(())
}
