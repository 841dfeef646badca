use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Please enter a task!")]
    EmptyTask,

    #[error("Duration must be greater than 0")]
    ZeroDuration,

    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("{0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Corrupt session log {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_empty_task() {
        assert_eq!(AppError::EmptyTask.to_string(), "Please enter a task!");
    }

    #[test]
    fn app_error_display_zero_duration() {
        assert_eq!(
            AppError::ZeroDuration.to_string(),
            "Duration must be greater than 0"
        );
    }

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn store_error_display_parse() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = StoreError::Parse {
            path: PathBuf::from("pomodoro_data.json"),
            source: bad,
        };
        assert!(
            e.to_string()
                .starts_with("Corrupt session log pomodoro_data.json:")
        );
    }

    #[test]
    fn app_error_from_store_error() {
        let e = StoreError::Read {
            path: PathBuf::from("pomodoro_data.json"),
            source: std::io::Error::other("denied"),
        };
        let app: AppError = e.into();
        assert_eq!(app.to_string(), "Failed to read pomodoro_data.json: denied");
    }
}
