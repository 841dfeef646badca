//! Core data types for the persisted session log
//!
//! The document layout is fixed: per-day completion counts keyed by
//! "YYYY-MM-DD", an all-time counter, and an append-only ordered log.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::consts::DATE_FORMAT;

/// Shown in place of notes when an entry carries none
pub(crate) const NO_NOTES: &str = "No notes provided";

/// One completed Pomodoro session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SessionEntry {
    pub(crate) task: String,
    /// Session start time, recorded at completion
    pub(crate) datetime: NaiveDateTime,
    /// Optional; entries written by older variants omit this field entirely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) notes: Option<String>,
}

impl SessionEntry {
    pub(crate) fn notes_or_default(&self) -> &str {
        self.notes.as_deref().unwrap_or(NO_NOTES)
    }
}

/// The full persisted document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct SessionLog {
    #[serde(default)]
    pub(crate) daily_count: HashMap<String, u64>,
    #[serde(default)]
    pub(crate) total_count: u64,
    #[serde(default)]
    pub(crate) logs: Vec<SessionEntry>,
}

impl SessionLog {
    pub(crate) fn count_for(&self, date: NaiveDate) -> u64 {
        self.daily_count
            .get(&date.format(DATE_FORMAT).to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Per-day counts within `filter`, sorted ascending by date. Keys that
    /// do not parse as dates are kept only when no filter is active.
    pub(crate) fn daily_counts(&self, filter: &DateFilter) -> Vec<(String, u64)> {
        let mut rows: Vec<(String, u64)> = self
            .daily_count
            .iter()
            .filter(|(date, _)| match NaiveDate::parse_from_str(date, DATE_FORMAT) {
                Ok(d) => filter.contains(d),
                Err(_) => !filter.is_active(),
            })
            .map(|(date, count)| (date.clone(), *count))
            .collect();
        rows.sort();
        rows
    }

    /// total_count must equal both the daily sum and the log length.
    /// A store that fails this still loads; see `SessionStore::load`.
    pub(crate) fn is_consistent(&self) -> bool {
        let daily_sum: u64 = self.daily_count.values().sum();
        daily_sum == self.total_count && self.logs.len() as u64 == self.total_count
    }
}

/// Inclusive date range filter for stats output
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DateFilter {
    pub(crate) since: Option<NaiveDate>,
    pub(crate) until: Option<NaiveDate>,
}

impl DateFilter {
    pub(crate) fn is_active(&self) -> bool {
        self.since.is_some() || self.until.is_some()
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        if let Some(since) = self.since
            && date < since
        {
            return false;
        }
        if let Some(until) = self.until
            && date > until
        {
            return false;
        }
        true
    }
}
