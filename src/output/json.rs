use crate::core::{DateFilter, HistoryCursor, SessionLog};

/// Sorted array of per-day rows plus the totals, pretty-printed.
pub(crate) fn output_stats_json(log: &SessionLog, filter: &DateFilter) {
    let rows = log.daily_counts(filter);
    let shown: u64 = rows.iter().map(|(_, count)| count).sum();
    let days: Vec<serde_json::Value> = rows
        .iter()
        .map(|(date, count)| {
            serde_json::json!({
                "date": date,
                "sessions": count,
            })
        })
        .collect();
    let output = serde_json::json!({
        "days": days,
        "sessions": shown,
        "total_count": log.total_count,
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub(crate) fn output_today_json(date: &str, today_count: u64, all_time: u64) {
    let output = serde_json::json!({
        "date": date,
        "sessions": today_count,
        "total_count": all_time,
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

/// The entry under the cursor, with its position; `entry` is null for an
/// empty log.
pub(crate) fn output_log_json(cursor: &HistoryCursor<'_>, total: usize) {
    let output = serde_json::json!({
        "index": cursor.index(),
        "total": total,
        "entry": cursor.current(),
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
