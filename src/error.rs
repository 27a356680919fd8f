use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tonic::{Code, Status};

pub type Result<T> = std::result::Result<T, UserError>;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    Database(String),
}

impl UserError {
    /// Convert to gRPC Status for wire protocol
    pub fn to_status(&self) -> Status {
        match self {
            UserError::MissingField(field) => {
                Status::new(Code::InvalidArgument, format!("{} is required", field))
            }
            UserError::InvalidEmail(email) => Status::new(
                Code::InvalidArgument,
                format!("Invalid email format: {}", email),
            ),
            UserError::Validation(msg) => {
                Status::new(Code::InvalidArgument, format!("Validation error: {}", msg))
            }
            UserError::UserNotFound => Status::new(Code::NotFound, "User not found"),
            UserError::EmailAlreadyExists => {
                Status::new(Code::AlreadyExists, "Email already exists")
            }
            // Don't leak internal details on the wire
            UserError::Database(_) => Status::new(Code::Internal, "Internal server error"),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::MissingField(_) | UserError::InvalidEmail(_) | UserError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            UserError::UserNotFound => StatusCode::NOT_FOUND,
            UserError::EmailAlreadyExists => StatusCode::CONFLICT,
            UserError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            // Internal details stay in the logs
            UserError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

// Conversions from external error types
impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return UserError::EmailAlreadyExists;
            }
        }
        tracing::error!("Database error: {}", err);
        UserError::Database(err.to_string())
    }
}

// gRPC Status conversion
impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        err.to_status()
    }
}
