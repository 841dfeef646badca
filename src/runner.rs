//! Terminal countdown presentation
//!
//! The only scheduler in the program: a sleep-and-redraw loop that polls
//! the clock each tick. Interrupting the process mid-countdown records
//! nothing; only a completed countdown reaches the store.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use crate::core::{CountdownClock, format_mmss};

const BAR_WIDTH: usize = 50;
const TICK: Duration = Duration::from_millis(200);

/// Blocks until the countdown completes.
pub(crate) fn run_countdown(duration: Duration) {
    let clock = CountdownClock::start(duration);
    let total = clock.duration().as_secs_f64();

    loop {
        let now = Instant::now();
        let remaining = clock.remaining(now);
        draw_tick(remaining, total);
        if clock.is_complete(now) {
            break;
        }
        thread::sleep(TICK);
    }

    println!("\nTime's up!\x07");
}

fn draw_tick(remaining: Duration, total_seconds: f64) {
    let filled = if total_seconds > 0.0 {
        let ratio = 1.0 - remaining.as_secs_f64() / total_seconds;
        ((ratio * BAR_WIDTH as f64) as usize).min(BAR_WIDTH)
    } else {
        BAR_WIDTH
    };
    print!(
        "\r{} [{}{}]",
        format_mmss(remaining.as_secs()),
        "*".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    );
    let _ = std::io::stdout().flush();
}
