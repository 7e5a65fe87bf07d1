use thiserror::Error;

/// Error type for dive log statistics, validation and import.
#[derive(Error, Debug, Clone, PartialEq, uniffi::Error)]
#[uniffi(flat_error)]
pub enum DiveLogError {
    #[error("{statistic} requires at least one entry")]
    EmptyInput { statistic: &'static str },

    #[error("invalid {field} '{value}': {message}")]
    Parse {
        field: &'static str,
        value: String,
        message: String,
    },

    #[error("invalid entry {entry_id}: {message}")]
    InvalidEntry { entry_id: String, message: String },

    #[error("invalid user {user_id}: {message}")]
    InvalidUser { user_id: String, message: String },

    #[error("entry {entry_id} references unknown user {user_id}")]
    UnknownUser { entry_id: String, user_id: String },

    #[error("json error: {0}")]
    Json(String),
}

impl DiveLogError {
    pub(crate) fn empty(statistic: &'static str) -> Self {
        DiveLogError::EmptyInput { statistic }
    }

    pub(crate) fn parse(field: &'static str, value: &str, message: impl Into<String>) -> Self {
        DiveLogError::Parse {
            field,
            value: value.to_string(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DiveLogError {
    fn from(err: serde_json::Error) -> Self {
        DiveLogError::Json(err.to_string())
    }
}
