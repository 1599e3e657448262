use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::UserResponseData;
use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn get_user<US, CS>(
    State(state): State<AppState<US, CS>>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<UserResponseData>), ApiError>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let user_id = UserId::from_string(&user_id).map_err(UserError::from)?;

    state
        .user_service
        .get_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| (StatusCode::OK, Json(user.into())))
}
