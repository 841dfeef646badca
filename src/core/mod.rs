//! Core module - session records and countdown arithmetic, no I/O

mod clock;
mod history;
mod record;
mod types;

pub(crate) use clock::{CountdownClock, format_mmss};
pub(crate) use history::{EMPTY_LOG_MESSAGE, HistoryCursor, render_entry};
pub(crate) use record::record_completion;
pub(crate) use types::{DateFilter, SessionLog};
