use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::app::run_local;
use crate::args::{StepArgs, normalize_legacy_flags};
use crate::config::{apply_config, load_config};
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_local(&args))?;
    Ok(())
}

fn parse_args() -> AppResult<(StepArgs, ArgMatches)> {
    let raw_args = normalize_legacy_flags(std::env::args_os());
    let matches = StepArgs::command().get_matches_from(raw_args);
    let args = StepArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
