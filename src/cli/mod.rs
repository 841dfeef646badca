mod args;
mod commands;

pub(crate) use args::Cli;
pub(crate) use commands::{Commands, LogArgs, StartArgs, StatsArgs};
