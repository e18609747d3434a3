use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Invalid activity level '{given}'{}", suggestion_hint(.suggestion))]
    InvalidActivityLevel {
        given: String,
        suggestion: Option<String>,
    },

    #[error("Invalid {field}: '{value}' (expected a positive number)")]
    InvalidNumericInput { field: &'static str, value: String },

    #[error("Unsupported sex value: '{0}'")]
    UnsupportedSex(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

impl TallyError {
    pub fn numeric(field: &'static str, value: impl ToString) -> Self {
        TallyError::InvalidNumericInput {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
