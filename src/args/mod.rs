//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
mod normalize;
pub(crate) mod parsers;


pub use cli::StepArgs;
pub(crate) use defaults::DEFAULT_USER_AGENT;
pub use normalize::normalize_legacy_flags;
pub(crate) use parsers::parse_duration;
