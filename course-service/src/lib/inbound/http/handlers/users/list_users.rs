use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::UserResponseData;
use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn list_users<US, CS>(
    State(state): State<AppState<US, CS>>,
) -> Result<(StatusCode, Json<Vec<UserResponseData>>), ApiError>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let users = state.user_service.list_users().await?;

    Ok((
        StatusCode::OK,
        Json(users.iter().map(UserResponseData::from).collect()),
    ))
}
