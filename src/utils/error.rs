use thiserror::Error;

/// `--year` 無法解析時輸出的固定訊息
pub const INVALID_YEAR_MESSAGE: &str = "error: option '-y, --year <year>' argument is not a number";

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode response body as {encoding}")]
    Decode { encoding: &'static str },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected column layout: missing {missing:?}, found {found:?}")]
    UnexpectedColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}", INVALID_YEAR_MESSAGE)]
    InvalidYear { value: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Data,
    Output,
}

impl HolidayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HolidayError::InvalidYear { .. } | HolidayError::InvalidConfigValue { .. } => {
                ErrorCategory::Input
            }
            HolidayError::Http(_) | HolidayError::HttpStatus { .. } => ErrorCategory::Network,
            HolidayError::Decode { .. }
            | HolidayError::Csv(_)
            | HolidayError::UnexpectedColumns { .. } => ErrorCategory::Data,
            HolidayError::Io(_) => ErrorCategory::Output,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the command line options (see --help)",
            ErrorCategory::Network => "Check network connectivity and the source URL",
            ErrorCategory::Data => "The upstream CSV format may have changed; inspect the downloaded file",
            ErrorCategory::Output => "Check that the output directory exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, HolidayError>;
