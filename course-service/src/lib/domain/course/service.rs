use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::course::errors::CourseError;
use crate::domain::course::models::Course;
use crate::domain::course::models::CourseId;
use crate::domain::course::models::CreateCourseCommand;
use crate::domain::course::models::UpdateCourseCommand;
use crate::domain::course::ports::CourseRepository;
use crate::domain::course::ports::CourseServicePort;

/// Domain service implementation for course operations.
pub struct CourseService<R>
where
    R: CourseRepository,
{
    repository: Arc<R>,
}

impl<R> CourseService<R>
where
    R: CourseRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CourseServicePort for CourseService<R>
where
    R: CourseRepository,
{
    async fn list_courses(&self) -> Result<Vec<Course>, CourseError> {
        self.repository.list_all().await
    }

    async fn get_course(&self, id: &CourseId) -> Result<Course, CourseError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CourseError::NotFound(id.to_string()))
    }

    async fn create_course(&self, command: CreateCourseCommand) -> Result<Course, CourseError> {
        let course = Course {
            id: CourseId::new(),
            title: command.title,
            description: command.description,
            category: command.category,
            duration_hours: command.duration_hours,
        };

        self.repository.create(course).await
    }

    async fn update_course(
        &self,
        id: &CourseId,
        command: UpdateCourseCommand,
    ) -> Result<Course, CourseError> {
        let mut course = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CourseError::NotFound(id.to_string()))?;

        course.title = command.title;
        course.description = command.description;
        course.category = command.category;
        course.duration_hours = command.duration_hours;

        self.repository.update(course).await
    }

    async fn delete_course(&self, id: &CourseId) -> Result<(), CourseError> {
        // Resolve first so a missing id surfaces as NotFound
        let course = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CourseError::NotFound(id.to_string()))?;

        self.repository.delete(&course.id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::course::models::CourseCategory;
    use crate::domain::course::models::CourseDescription;
    use crate::domain::course::models::CourseTitle;
    use crate::domain::course::models::DurationHours;

    mock! {
        pub TestCourseRepository {}

        #[async_trait]
        impl CourseRepository for TestCourseRepository {
            async fn create(&self, course: Course) -> Result<Course, CourseError>;
            async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseError>;
            async fn list_all(&self) -> Result<Vec<Course>, CourseError>;
            async fn update(&self, course: Course) -> Result<Course, CourseError>;
            async fn delete(&self, id: &CourseId) -> Result<(), CourseError>;
        }
    }

    fn test_course(title: &str) -> Course {
        Course {
            id: CourseId::new(),
            title: CourseTitle::new(title.to_string()).unwrap(),
            description: CourseDescription::new("A course".to_string()).unwrap(),
            category: CourseCategory::new("Backend".to_string()).unwrap(),
            duration_hours: DurationHours::new(40).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_course_assigns_id() {
        let mut repository = MockTestCourseRepository::new();

        repository
            .expect_create()
            .withf(|course| course.title.as_str() == "Rust Fundamentals")
            .times(1)
            .returning(|course| Ok(course));

        let service = CourseService::new(Arc::new(repository));

        let command = CreateCourseCommand {
            title: CourseTitle::new("Rust Fundamentals".to_string()).unwrap(),
            description: CourseDescription::new("Ownership and borrowing".to_string()).unwrap(),
            category: CourseCategory::new("Backend".to_string()).unwrap(),
            duration_hours: DurationHours::new(40).unwrap(),
        };

        let course = service.create_course(command).await.unwrap();
        assert_eq!(course.duration_hours.value(), 40);
    }

    #[tokio::test]
    async fn test_get_course_not_found() {
        let mut repository = MockTestCourseRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CourseService::new(Arc::new(repository));

        let result = service.get_course(&CourseId::new()).await;
        assert!(matches!(result.unwrap_err(), CourseError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_course_replaces_fields() {
        let mut repository = MockTestCourseRepository::new();

        let existing = test_course("Old title");
        let id = existing.id;
        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .withf(move |course_id| *course_id == id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository
            .expect_update()
            .withf(|course| course.title.as_str() == "New title")
            .times(1)
            .returning(|course| Ok(course));

        let service = CourseService::new(Arc::new(repository));

        let command = UpdateCourseCommand {
            title: CourseTitle::new("New title".to_string()).unwrap(),
            description: CourseDescription::new("Updated".to_string()).unwrap(),
            category: CourseCategory::new("Backend".to_string()).unwrap(),
            duration_hours: DurationHours::new(8).unwrap(),
        };

        let updated = service.update_course(&id, command).await.unwrap();
        assert_eq!(updated.title.as_str(), "New title");
    }

    #[tokio::test]
    async fn test_delete_course_not_found() {
        let mut repository = MockTestCourseRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = CourseService::new(Arc::new(repository));

        let result = service.delete_course(&CourseId::new()).await;
        assert!(matches!(result.unwrap_err(), CourseError::NotFound(_)));
    }
}
