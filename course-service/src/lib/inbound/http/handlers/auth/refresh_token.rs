use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::TokenResponseData;
use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Fixed message for every refresh failure; decode internals stay in logs.
const INVALID_REFRESH_TOKEN: &str = "Invalid or expired refresh token";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequestBody {
    refresh_token: String,
}

/// Mint a new access token from a presented refresh token.
///
/// The refresh token is not rotated; the one presented is echoed back. The
/// subject is re-checked against the credential store so a deleted or
/// disabled principal cannot keep minting access tokens.
pub async fn refresh_token<US, CS>(
    State(state): State<AppState<US, CS>>,
    Json(body): Json<RefreshTokenRequestBody>,
) -> Result<(StatusCode, Json<TokenResponseData>), ApiError>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let grant = state
        .authenticator
        .refresh(&body.refresh_token)
        .map_err(|e| match e {
            auth::AuthenticationError::Token(token_err) => {
                tracing::error!(error = %token_err, "Refresh token minting failed");
                ApiError::InternalServerError("Token refresh failed".to_string())
            }
            other => {
                tracing::warn!(error = %other, "Refresh token rejected");
                ApiError::AuthenticationFailed(INVALID_REFRESH_TOKEN.to_string())
            }
        })?;

    let username = Username::new(grant.subject)
        .map_err(|_| ApiError::AuthenticationFailed(INVALID_REFRESH_TOKEN.to_string()))?;
    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|_| ApiError::AuthenticationFailed(INVALID_REFRESH_TOKEN.to_string()))?;

    if !user.enabled {
        return Err(ApiError::AuthenticationFailed(
            INVALID_REFRESH_TOKEN.to_string(),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(TokenResponseData {
            access_token: grant.access_token,
            refresh_token: body.refresh_token,
            token_type: auth::TOKEN_TYPE.to_string(),
            expires_in_seconds: grant.expires_in,
            login_name: user.username.to_string(),
        }),
    ))
}
