//! Bounds-clamped navigation over logged sessions

use chrono::Duration;

use super::types::SessionEntry;

pub(crate) const EMPTY_LOG_MESSAGE: &str = "No Pomodoros logged yet.";

/// Cursor over the append-only log. Starts at the newest entry; movement
/// clamps at both ends and never goes out of range.
#[derive(Debug)]
pub(crate) struct HistoryCursor<'a> {
    entries: &'a [SessionEntry],
    index: usize,
}

impl<'a> HistoryCursor<'a> {
    pub(crate) fn latest(entries: &'a [SessionEntry]) -> Self {
        HistoryCursor {
            entries,
            index: entries.len().saturating_sub(1),
        }
    }

    pub(crate) fn at(entries: &'a [SessionEntry], index: usize) -> Self {
        HistoryCursor {
            entries,
            index: index.min(entries.len().saturating_sub(1)),
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn current(&self) -> Option<&'a SessionEntry> {
        self.entries.get(self.index)
    }

    /// Move toward older entries, clamped at 0.
    pub(crate) fn previous(&mut self) -> Option<&'a SessionEntry> {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Move toward newer entries, clamped at the last index.
    pub(crate) fn next(&mut self) -> Option<&'a SessionEntry> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
        }
        self.current()
    }
}

/// Layout of one log entry as shown by the history view. `session_minutes`
/// supplies the end time; the store does not record it.
pub(crate) fn render_entry(entry: &SessionEntry, session_minutes: u32) -> String {
    let end = entry.datetime + Duration::minutes(i64::from(session_minutes));
    format!(
        "Date: {}\nTask: {}\nStart Time: {}\nEnd Time: {}\nNotes: {}",
        entry.datetime.date(),
        entry.task,
        entry.datetime.format("%H:%M:%S"),
        end.format("%H:%M:%S"),
        entry.notes_or_default(),
    )
}
