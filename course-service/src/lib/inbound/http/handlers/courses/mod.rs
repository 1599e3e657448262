use serde::Deserialize;
use serde::Serialize;

use crate::domain::course::errors::CourseFieldError;
use crate::domain::course::models::Course;
use crate::domain::course::models::CourseCategory;
use crate::domain::course::models::CourseDescription;
use crate::domain::course::models::CourseTitle;
use crate::domain::course::models::CreateCourseCommand;
use crate::domain::course::models::DurationHours;
use crate::domain::course::models::UpdateCourseCommand;
use crate::inbound::http::handlers::field_error;
use crate::inbound::http::handlers::ApiError;

pub mod create_course;
pub mod delete_course;
pub mod get_course;
pub mod list_courses;
pub mod update_course;

/// Course as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponseData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration_hours: i32,
}

impl From<&Course> for CourseResponseData {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.to_string(),
            title: course.title.as_str().to_string(),
            description: course.description.as_str().to_string(),
            category: course.category.as_str().to_string(),
            duration_hours: course.duration_hours.value(),
        }
    }
}

/// HTTP request body shared by create and update; updates are full
/// replacements so the shapes are identical.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequestBody {
    title: String,
    description: String,
    category: String,
    duration_hours: i32,
}

impl CourseRequestBody {
    fn validate_fields(
        self,
    ) -> Result<
        (
            CourseTitle,
            CourseDescription,
            CourseCategory,
            DurationHours,
        ),
        CourseFieldError,
    > {
        Ok((
            CourseTitle::new(self.title)?,
            CourseDescription::new(self.description)?,
            CourseCategory::new(self.category)?,
            DurationHours::new(self.duration_hours)?,
        ))
    }

    fn try_into_create_command(self) -> Result<CreateCourseCommand, CourseFieldError> {
        let (title, description, category, duration_hours) = self.validate_fields()?;
        Ok(CreateCourseCommand {
            title,
            description,
            category,
            duration_hours,
        })
    }

    fn try_into_update_command(self) -> Result<UpdateCourseCommand, CourseFieldError> {
        let (title, description, category, duration_hours) = self.validate_fields()?;
        Ok(UpdateCourseCommand {
            title,
            description,
            category,
            duration_hours,
        })
    }
}

fn validation_error(err: CourseFieldError) -> ApiError {
    ApiError::ValidationFailed(vec![field_error(&err)])
}
