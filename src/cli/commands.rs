//! CLI subcommand definitions

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run a Pomodoro countdown and log the completed session
    Start(StartArgs),
    /// Show per-day session counts (default)
    Stats(StatsArgs),
    /// Show today's session count
    Today,
    /// Browse logged sessions one entry at a time
    Log(LogArgs),
}

#[derive(Args)]
pub(crate) struct StartArgs {
    /// What do you plan to do?
    pub(crate) task: String,

    /// Session length in minutes
    #[arg(short, long, value_name = "MINUTES")]
    pub(crate) minutes: Option<u32>,

    /// Notes to attach to the completed session
    #[arg(short, long, value_name = "TEXT")]
    pub(crate) notes: Option<String>,

    /// Session length in seconds, overriding --minutes (test hook)
    #[arg(long, hide = true, value_name = "SECONDS")]
    pub(crate) seconds: Option<u64>,
}

#[derive(Args, Default)]
pub(crate) struct StatsArgs {
    /// Filter from date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    pub(crate) since: Option<String>,

    /// Filter until date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    pub(crate) until: Option<String>,
}

#[derive(Args)]
pub(crate) struct LogArgs {
    /// Entry index to show, oldest first (clamped; defaults to the newest)
    #[arg(short, long)]
    pub(crate) index: Option<usize>,
}
