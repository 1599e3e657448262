use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::RoleError;
use crate::domain::user::errors::UsernameError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::FieldError;
use crate::inbound::http::router::AppState;

pub async fn register<US, CS>(
    State(state): State<AppState<US, CS>>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<(StatusCode, Json<RegisterResponseData>), ApiError>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    state
        .user_service
        .register_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| (StatusCode::CREATED, Json(user.into())))
}

/// HTTP request body for registering a principal (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestBody {
    login_name: String,
    email: String,
    password: String,
    role: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid login name: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid role: {0}")]
    Role(#[from] RoleError),
}

impl ParseRegisterRequestError {
    fn field(&self) -> &'static str {
        match self {
            Self::Username(_) => "loginName",
            Self::Email(_) => "email",
            Self::Role(_) => "role",
        }
    }
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let username = Username::new(self.login_name)?;
        let email = EmailAddress::new(self.email)?;
        let role = self.role.map(Role::new).transpose()?;
        Ok(RegisterUserCommand::new(
            username,
            email,
            self.password,
            role,
        ))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::ValidationFailed(vec![FieldError {
            field: err.field().to_string(),
            message: err.to_string(),
        }])
    }
}

/// Registered principal, password hash stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseData {
    pub id: String,
    pub login_name: String,
    pub email: String,
    pub enabled: bool,
    pub role: String,
}

impl From<&User> for RegisterResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            login_name: user.username.to_string(),
            email: user.email.as_str().to_string(),
            enabled: user.enabled,
            role: user.role.to_string(),
        }
    }
}
