use comfy_table::{
    Cell, Color, ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS,
    presets::UTF8_FULL,
};

use crate::core::{DateFilter, SessionLog};
use crate::output::format::{header_cell, right_cell, styled_cell};

/// Per-day session counts, oldest first, with a totals row.
pub(crate) fn print_stats_table(log: &SessionLog, filter: &DateFilter, use_color: bool) {
    let rows = log.daily_counts(filter);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Sessions", use_color),
    ]);

    let mut total: u64 = 0;
    for (date, count) in &rows {
        total += count;
        table.add_row(vec![Cell::new(date), right_cell(count.to_string())]);
    }

    let total_color = if use_color { Some(Color::Yellow) } else { None };
    table.add_row(vec![
        styled_cell("Total", total_color, true),
        right_cell(total.to_string()),
    ]);

    println!("{table}");
    print_summary_line(total, rows.len(), log.total_count, filter.is_active());
}

fn print_summary_line(shown: u64, days: usize, all_time: u64, filtered: bool) {
    let day_word = if days == 1 { "day" } else { "days" };
    if filtered && shown != all_time {
        println!("\n  {shown} sessions across {days} {day_word} ({all_time} all time)\n");
    } else {
        println!("\n  {shown} sessions across {days} {day_word}\n");
    }
}

/// One-line summary for `today`.
pub(crate) fn print_today_line(date: &str, today_count: u64, all_time: u64) {
    println!("{date}: {today_count} Pomodoros today, {all_time} all time");
}
