use crate::envelope::{message, status, Envelope};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

pub type Result<T> = std::result::Result<T, AccountError>;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Token signing failed: {0}")]
    Token(String),

    #[error("Mail delivery failed: {0}")]
    Mail(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AccountError {
    fn from(err: sqlx::Error) -> Self {
        AccountError::Database(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AccountError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AccountError::Token(err.to_string())
    }
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        AccountError::Internal(err.to_string())
    }
}

impl ResponseError for AccountError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Every infrastructure failure renders the same envelope shape the
    /// handlers use, so clients never see a bare framework error body.
    fn error_response(&self) -> HttpResponse {
        match self {
            AccountError::DuplicateEmail | AccountError::Database(_) => {
                Envelope::fail(status::DB_ERROR, message::DB_ERROR).into_response()
            }
            _ => Envelope::fail(
                status::INTERNAL_SERVER_ERROR,
                message::INTERNAL_SERVER_ERROR,
            )
            .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_renders_db_error_envelope() {
        let response = AccountError::Database("boom".to_string()).error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display() {
        let err = AccountError::Mail("smtp down".to_string());
        assert_eq!(err.to_string(), "Mail delivery failed: smtp down");

        let err = AccountError::DuplicateEmail;
        assert_eq!(err.to_string(), "Email already exists");
    }
}
