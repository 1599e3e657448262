use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::course::errors::CourseError;
use crate::domain::course::models::CourseId;
use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_course<US, CS>(
    State(state): State<AppState<US, CS>>,
    Path(course_id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let course_id = CourseId::from_string(&course_id).map_err(CourseError::from)?;

    state.course_service.delete_course(&course_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
