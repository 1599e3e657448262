use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::validation_error;
use super::CourseRequestBody;
use super::CourseResponseData;
use crate::domain::course::errors::CourseError;
use crate::domain::course::models::CourseId;
use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn update_course<US, CS>(
    State(state): State<AppState<US, CS>>,
    Path(course_id): Path<String>,
    Json(body): Json<CourseRequestBody>,
) -> Result<(StatusCode, Json<CourseResponseData>), ApiError>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let course_id = CourseId::from_string(&course_id).map_err(CourseError::from)?;
    let command = body.try_into_update_command().map_err(validation_error)?;

    state
        .course_service
        .update_course(&course_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref course| (StatusCode::OK, Json(course.into())))
}
