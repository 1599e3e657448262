use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::UserResponseData;
use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::RoleError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::FieldError;
use crate::inbound::http::router::AppState;

pub async fn update_user<US, CS>(
    State(state): State<AppState<US, CS>>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateUserRequestBody>,
) -> Result<(StatusCode, Json<UserResponseData>), ApiError>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let user_id = UserId::from_string(&user_id).map_err(UserError::from)?;

    state
        .user_service
        .update_user(&user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| (StatusCode::OK, Json(user.into())))
}

/// HTTP request body for a partial principal update; absent fields are left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequestBody {
    email: Option<String>,
    role: Option<String>,
    enabled: Option<bool>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateUserRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid role: {0}")]
    Role(#[from] RoleError),
}

impl ParseUpdateUserRequestError {
    fn field(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Role(_) => "role",
        }
    }
}

impl UpdateUserRequestBody {
    fn try_into_command(self) -> Result<UpdateUserCommand, ParseUpdateUserRequestError> {
        let email = self.email.map(EmailAddress::new).transpose()?;
        let role = self.role.map(Role::new).transpose()?;
        Ok(UpdateUserCommand {
            email,
            role,
            enabled: self.enabled,
        })
    }
}

impl From<ParseUpdateUserRequestError> for ApiError {
    fn from(err: ParseUpdateUserRequestError) -> Self {
        ApiError::ValidationFailed(vec![FieldError {
            field: err.field().to_string(),
            message: err.to_string(),
        }])
    }
}
