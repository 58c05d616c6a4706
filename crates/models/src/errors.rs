use thiserror::Error;

/// Errors the statistics block can surface to the route layer.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("database error: {reason}")]
    Database { reason: String },

    #[error("block is only visible to authenticated users")]
    Forbidden,
}

impl StatsError {
    /// HTTP status code for the error.
    pub fn status_code(&self) -> u16 {
        match self {
            StatsError::Database { .. } => 500,
            StatsError::Forbidden => 403,
        }
    }

    /// Error category used in the wire response.
    pub fn category(&self) -> &'static str {
        match self {
            StatsError::Database { .. } => "database",
            StatsError::Forbidden => "auth",
        }
    }
}

/// Result type alias for block operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Error response for API endpoints.
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl From<&StatsError> for ErrorResponse {
    fn from(err: &StatsError) -> Self {
        Self {
            error: err.category().to_string(),
            message: err.to_string(),
            code: err.status_code(),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl From<anyhow::Error> for StatsError {
    fn from(err: anyhow::Error) -> Self {
        StatsError::Database {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        let db = StatsError::Database {
            reason: "connection refused".to_string(),
        };
        assert_eq!(db.status_code(), 500);
        assert_eq!(db.category(), "database");
        assert_eq!(StatsError::Forbidden.status_code(), 403);
        assert_eq!(StatsError::Forbidden.category(), "auth");
    }

    #[test]
    fn error_response_carries_message_and_code() {
        let err = StatsError::Database {
            reason: "timeout".to_string(),
        };
        let resp = ErrorResponse::from(&err);
        assert_eq!(resp.code, 500);
        assert!(resp.message.contains("timeout"));
    }
}
