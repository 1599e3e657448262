use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::CourseResponseData;
use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn list_courses<US, CS>(
    State(state): State<AppState<US, CS>>,
) -> Result<(StatusCode, Json<Vec<CourseResponseData>>), ApiError>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let courses = state.course_service.list_courses().await?;

    Ok((
        StatusCode::OK,
        Json(courses.iter().map(CourseResponseData::from).collect()),
    ))
}
