//! Error types for the payment record service.

/// Application-level errors for the orchestration layer.
///
/// Every variant renders as the envelope message the API is contractually
/// bound to; status codes come from [`AppError::status`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Does not have active")]
    ActiveMissing,

    #[error("Active No Content")]
    ActiveNoContent,

    #[error("Does not have client")]
    ClientMissing,

    #[error("Client No Content")]
    ClientNoContent,

    #[error("The Active is not enabled for the client")]
    TypeMismatch,

    #[error("Not found")]
    NotFound,

    #[error("No Content")]
    NoContent,

    #[error("Invalid payment id")]
    InvalidId,

    #[error("{0}")]
    Dependency(String),
}

impl AppError {
    /// HTTP status carried inside (and alongside) the failure envelope.
    pub fn status(&self) -> u16 {
        match self {
            AppError::NotFound => 404,
            _ => 400,
        }
    }
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(e) => AppError::Dependency(e),
            RepoError::NotFound => AppError::NotFound,
        }
    }
}
