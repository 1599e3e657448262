use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::course::errors::CourseError;
use crate::domain::course::errors::CourseFieldError;
use crate::domain::user::errors::UserError;

pub mod auth;
pub mod courses;
pub mod users;

/// API-boundary error with the wire shape `{error, message, status}`.
///
/// `ValidationFailed` additionally carries field-level detail. Token and
/// credential failures are normalized before they get here; no signature or
/// format internals leak to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Bad login credentials or an invalid/expired token presented
    AuthenticationFailed(String),
    /// Protected route reached without a bound identity
    Unauthorized(String),
    /// Malformed request body, with per-field detail
    ValidationFailed(Vec<FieldError>),
    /// Duplicate login name or email at registration
    ConflictingIdentity(String),
    NotFound(String),
    InternalServerError(String),
}

/// Single field violation inside a `ValidationFailed` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed(_) => "AuthenticationFailed",
            Self::Unauthorized(_) => "Unauthorized",
            Self::ValidationFailed(_) => "ValidationFailed",
            Self::ConflictingIdentity(_) => "ConflictingIdentity",
            Self::NotFound(_) => "NotFound",
            Self::InternalServerError(_) => "InternalServerError",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::AuthenticationFailed(_) | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::ValidationFailed(_) | Self::ConflictingIdentity(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();

        let (message, errors) = match self {
            Self::ValidationFailed(field_errors) => ("Validation failed".to_string(), Some(field_errors)),
            Self::AuthenticationFailed(msg)
            | Self::Unauthorized(msg)
            | Self::ConflictingIdentity(msg)
            | Self::NotFound(msg)
            | Self::InternalServerError(msg) => (msg, None),
        };

        let body = ErrorBody {
            error: kind,
            message,
            status: status.as_u16(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::ConflictingIdentity(err.to_string())
            }
            UserError::InvalidUserId(_) => ApiError::ValidationFailed(vec![FieldError {
                field: "id".to_string(),
                message: err.to_string(),
            }]),
            UserError::InvalidUsername(_) => ApiError::ValidationFailed(vec![FieldError {
                field: "loginName".to_string(),
                message: err.to_string(),
            }]),
            UserError::InvalidEmail(_) => ApiError::ValidationFailed(vec![FieldError {
                field: "email".to_string(),
                message: err.to_string(),
            }]),
            UserError::InvalidRole(_) => ApiError::ValidationFailed(vec![FieldError {
                field: "role".to_string(),
                message: err.to_string(),
            }]),
            UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<CourseError> for ApiError {
    fn from(err: CourseError) -> Self {
        match err {
            CourseError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CourseError::InvalidCourseId(_) => ApiError::ValidationFailed(vec![FieldError {
                field: "id".to_string(),
                message: err.to_string(),
            }]),
            CourseError::InvalidField(ref field_err) => ApiError::ValidationFailed(vec![
                field_error(field_err),
            ]),
            CourseError::DatabaseError(_) | CourseError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

pub(crate) fn field_error(err: &CourseFieldError) -> FieldError {
    FieldError {
        field: err.field().to_string(),
        message: err.to_string(),
    }
}
