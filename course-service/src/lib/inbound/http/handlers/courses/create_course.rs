use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::validation_error;
use super::CourseRequestBody;
use super::CourseResponseData;
use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn create_course<US, CS>(
    State(state): State<AppState<US, CS>>,
    Json(body): Json<CourseRequestBody>,
) -> Result<(StatusCode, Json<CourseResponseData>), ApiError>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let command = body.try_into_create_command().map_err(validation_error)?;

    state
        .course_service
        .create_course(command)
        .await
        .map_err(ApiError::from)
        .map(|ref course| (StatusCode::CREATED, Json(course.into())))
}
