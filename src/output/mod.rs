mod format;
mod json;
mod table;

pub(crate) use json::{output_log_json, output_stats_json, output_today_json};
pub(crate) use table::{print_stats_table, print_today_line};
