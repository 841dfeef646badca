use std::time::Duration;

use chrono::Local;

use crate::cli::{Cli, Commands, LogArgs, StartArgs, StatsArgs};
use crate::config::Config;
use crate::consts::{DATE_FORMAT, DEFAULT_SESSION_MINUTES};
use crate::core::{
    DateFilter, EMPTY_LOG_MESSAGE, HistoryCursor, record_completion, render_entry,
};
use crate::error::AppError;
use crate::output::{
    output_log_json, output_stats_json, output_today_json, print_stats_table, print_today_line,
};
use crate::runner::run_countdown;
use crate::store::SessionStore;
use crate::utils::parse_date;

pub(crate) fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let store = SessionStore::new(&cli.data_file);

    match &cli.command {
        Some(Commands::Start(args)) => handle_start(&store, args, config),
        Some(Commands::Today) => handle_today(&store, cli),
        Some(Commands::Log(args)) => handle_log(&store, args, cli, config),
        Some(Commands::Stats(args)) => handle_stats(&store, args, cli),
        None => handle_stats(&store, &StatsArgs::default(), cli),
    }
}

fn session_minutes(config: &Config) -> u32 {
    config.minutes.unwrap_or(DEFAULT_SESSION_MINUTES)
}

fn handle_start(store: &SessionStore, args: &StartArgs, config: &Config) -> Result<(), AppError> {
    let task = args.task.trim();
    if task.is_empty() {
        return Err(AppError::EmptyTask);
    }

    let duration = match args.seconds {
        Some(seconds) => Duration::from_secs(seconds),
        None => {
            let minutes = args.minutes.unwrap_or_else(|| session_minutes(config));
            Duration::from_secs(u64::from(minutes) * 60)
        }
    };
    if duration.is_zero() {
        return Err(AppError::ZeroDuration);
    }

    // Fail on a corrupt store before the countdown, not after 25 minutes.
    let log = store.load()?;

    let started_at = Local::now().naive_local();
    println!("Starting task: {task}");
    run_countdown(duration);

    // Today is the date of recording; a session spanning midnight counts
    // toward the day it finished.
    let today = Local::now().date_naive();
    let log = record_completion(log, task, started_at, args.notes.clone(), today);
    store.save(&log)?;

    println!(
        "Pomodoro completed! Total for today: {}, all time: {}",
        log.count_for(today),
        log.total_count
    );
    Ok(())
}

fn handle_today(store: &SessionStore, cli: &Cli) -> Result<(), AppError> {
    let log = store.load()?;
    let today = Local::now().date_naive();
    let date = today.format(DATE_FORMAT).to_string();
    if cli.json {
        output_today_json(&date, log.count_for(today), log.total_count);
    } else {
        print_today_line(&date, log.count_for(today), log.total_count);
    }
    Ok(())
}

fn handle_stats(store: &SessionStore, args: &StatsArgs, cli: &Cli) -> Result<(), AppError> {
    let log = store.load()?;
    let filter = DateFilter {
        since: args.since.as_deref().map(parse_date).transpose()?,
        until: args.until.as_deref().map(parse_date).transpose()?,
    };

    if log.daily_counts(&filter).is_empty() && !cli.json {
        println!("No sessions found for the specified date range.");
        return Ok(());
    }

    if cli.json {
        output_stats_json(&log, &filter);
    } else {
        print_stats_table(&log, &filter, cli.use_color());
    }
    Ok(())
}

fn handle_log(
    store: &SessionStore,
    args: &LogArgs,
    cli: &Cli,
    config: &Config,
) -> Result<(), AppError> {
    let log = store.load()?;
    let cursor = match args.index {
        Some(index) => HistoryCursor::at(&log.logs, index),
        None => HistoryCursor::latest(&log.logs),
    };

    if cli.json {
        output_log_json(&cursor, log.logs.len());
        return Ok(());
    }

    match cursor.current() {
        Some(entry) => {
            println!(
                "[{} of {}]\n{}",
                cursor.index() + 1,
                log.logs.len(),
                render_entry(entry, session_minutes(config))
            );
        }
        None => println!("{EMPTY_LOG_MESSAGE}"),
    }
    Ok(())
}
