use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Empty message")]
    EmptyMessage,

    #[error("No {0} provided")]
    MissingField(&'static str),

    #[error("Polarity estimator '{name}' failed: {reason}")]
    Estimator { name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            ChatError::EmptyMessage | ChatError::MissingField(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Internal details stay in the log.
        let error = match self {
            ChatError::EmptyMessage | ChatError::MissingField(_) => self.to_string(),
            _ => "processing failed".to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { error })
    }
}
