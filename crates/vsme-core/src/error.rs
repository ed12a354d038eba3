use thiserror::Error;

#[derive(Debug, Error)]
pub enum VsmeError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Monthly report limit reached ({used}/{limit}) on the {plan} plan. Upgrade to {upgrade_to}")]
    QuotaExceeded {
        plan: String,
        used: u32,
        limit: u32,
        upgrade_to: String,
    },

    #[error("Report not found: {0}")]
    NotFound(u64),

    #[error("Submission already recorded: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for VsmeError {
    fn from(e: serde_json::Error) -> Self {
        VsmeError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for VsmeError {
    fn from(e: std::io::Error) -> Self {
        VsmeError::Storage(e.to_string())
    }
}
