use thiserror::Error;

/// Application-level error type.
///
/// Per-document extraction problems are never surfaced through this type;
/// they travel as `ParsedResume::Failed` so a batch keeps going.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Similarity threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, used in logs and failed report entries.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidThreshold(_) => "INVALID_THRESHOLD",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "INTERNAL_ERROR"
            }
        }
    }
}
