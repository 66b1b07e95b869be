use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Relational database is not configured")]
    NotConfigured,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document store error: {0}")]
    DocumentStore(#[from] mongodb::error::Error),

    #[error("Document store did not answer within {0} ms")]
    Timeout(u128),

    #[error("Invalid input: {0}")]
    BadRequest(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            Self::BadRequest(msg) => msg.clone(),
            other => {
                log::error!("{}", other);
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(message)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
