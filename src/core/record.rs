//! Pure session-recording logic

use chrono::{NaiveDate, NaiveDateTime};

use crate::consts::DATE_FORMAT;

use super::types::{SessionEntry, SessionLog};

/// Fold one completed session into the document.
///
/// `today` is the date the completion is being recorded, supplied by the
/// caller; it is NOT derived from `started_at`. A session started before
/// midnight counts toward the day it finished.
pub(crate) fn record_completion(
    mut log: SessionLog,
    task: &str,
    started_at: NaiveDateTime,
    notes: Option<String>,
    today: NaiveDate,
) -> SessionLog {
    let key = today.format(DATE_FORMAT).to_string();
    *log.daily_count.entry(key).or_insert(0) += 1;
    log.total_count += 1;
    log.logs.push(SessionEntry {
        task: task.to_string(),
        datetime: started_at,
        notes,
    });
    log
}
