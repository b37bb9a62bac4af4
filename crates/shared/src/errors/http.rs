use crate::errors::{
    error::{AuthErrorResponse, ErrorResponse},
    repository::RepositoryError,
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    /// Rejection from the admin guard. Renders as 403 with the
    /// `{"error": "Not authorized"}` body instead of the usual `detail` one.
    NotAuthorized,
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::UsernameTaken => HttpError::Conflict("Username already taken".into()),

            ServiceError::IncorrectPassword => HttpError::Forbidden("Incorrect password".into()),

            ServiceError::UserNotFound => HttpError::NotFound("User not found".into()),

            ServiceError::ProductNotFound => HttpError::NotFound("Product not found".into()),

            ServiceError::ProductsNotFound => HttpError::BadRequest("Products not found".into()),

            ServiceError::InsufficientStock => {
                HttpError::BadRequest("Insufficient stock available".into())
            }

            ServiceError::AmountTooLarge => {
                HttpError::BadRequest("Order amount is too large".into())
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::InsufficientStock { .. } => {
                    HttpError::BadRequest("Insufficient stock available".into())
                }
            },

            ServiceError::Jwt(_) | ServiceError::TokenExpired => HttpError::NotAuthorized,

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            HttpError::NotAuthorized => {
                let body = Json(AuthErrorResponse {
                    error: "Not authorized".into(),
                });
                return (StatusCode::FORBIDDEN, body).into_response();
            }
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { detail });

        (status, body).into_response()
    }
}
