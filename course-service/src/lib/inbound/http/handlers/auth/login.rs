use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::TokenResponseData;
use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Fixed message for every login failure.
///
/// Unknown login name, wrong password, and disabled account are
/// indistinguishable to the caller so the endpoint cannot be used to
/// enumerate accounts.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    login_name: String,
    password: String,
}

pub async fn login<US, CS>(
    State(state): State<AppState<US, CS>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<(StatusCode, Json<TokenResponseData>), ApiError>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let username = Username::new(body.login_name)
        .map_err(|_| ApiError::AuthenticationFailed(INVALID_CREDENTIALS.to_string()))?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                ApiError::AuthenticationFailed(INVALID_CREDENTIALS.to_string())
            }
            _ => ApiError::from(e),
        })?;

    if !user.enabled {
        return Err(ApiError::AuthenticationFailed(
            INVALID_CREDENTIALS.to_string(),
        ));
    }

    let pair = state
        .authenticator
        .login(user.username.as_str(), &body.password, &user.password_hash)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::AuthenticationFailed(INVALID_CREDENTIALS.to_string())
            }
            other => {
                tracing::error!(error = %other, "Login token minting failed");
                ApiError::InternalServerError("Login failed".to_string())
            }
        })?;

    Ok((
        StatusCode::OK,
        Json(TokenResponseData {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type.to_string(),
            expires_in_seconds: pair.expires_in,
            login_name: user.username.to_string(),
        }),
    ))
}
