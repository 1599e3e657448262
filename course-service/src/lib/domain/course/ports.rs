use async_trait::async_trait;

use crate::domain::course::errors::CourseError;
use crate::domain::course::models::Course;
use crate::domain::course::models::CourseId;
use crate::domain::course::models::CreateCourseCommand;
use crate::domain::course::models::UpdateCourseCommand;

/// Port for course domain service operations.
#[async_trait]
pub trait CourseServicePort: Send + Sync + 'static {
    async fn list_courses(&self) -> Result<Vec<Course>, CourseError>;

    /// # Errors
    /// * `NotFound` - Course does not exist
    async fn get_course(&self, id: &CourseId) -> Result<Course, CourseError>;

    async fn create_course(&self, command: CreateCourseCommand) -> Result<Course, CourseError>;

    /// Replace an existing course's fields.
    ///
    /// # Errors
    /// * `NotFound` - Course does not exist
    async fn update_course(
        &self,
        id: &CourseId,
        command: UpdateCourseCommand,
    ) -> Result<Course, CourseError>;

    /// # Errors
    /// * `NotFound` - Course does not exist
    async fn delete_course(&self, id: &CourseId) -> Result<(), CourseError>;
}

/// Persistence operations for the course aggregate.
#[async_trait]
pub trait CourseRepository: Send + Sync + 'static {
    async fn create(&self, course: Course) -> Result<Course, CourseError>;

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseError>;

    async fn list_all(&self) -> Result<Vec<Course>, CourseError>;

    /// # Errors
    /// * `NotFound` - Course does not exist
    async fn update(&self, course: Course) -> Result<Course, CourseError>;

    /// # Errors
    /// * `NotFound` - Course does not exist
    async fn delete(&self, id: &CourseId) -> Result<(), CourseError>;
}
