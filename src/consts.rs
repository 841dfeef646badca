/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Session log filename, resolved against the working directory
pub(crate) const DATA_FILE: &str = "pomodoro_data.json";

/// Classic Pomodoro work interval
pub(crate) const DEFAULT_SESSION_MINUTES: u32 = 25;
