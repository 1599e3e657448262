use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::course::errors::CourseError;
use crate::domain::course::models::Course;
use crate::domain::course::models::CourseCategory;
use crate::domain::course::models::CourseDescription;
use crate::domain::course::models::CourseId;
use crate::domain::course::models::CourseTitle;
use crate::domain::course::models::DurationHours;
use crate::domain::course::ports::CourseRepository;

/// Postgres adapter for the course aggregate.
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_course_row(row: PgRow) -> Result<Course, CourseError> {
    Ok(Course {
        id: CourseId(row.try_get("id").map_err(db_error)?),
        title: CourseTitle::new(row.try_get("title").map_err(db_error)?)?,
        description: CourseDescription::new(row.try_get("description").map_err(db_error)?)?,
        category: CourseCategory::new(row.try_get("category").map_err(db_error)?)?,
        duration_hours: DurationHours::new(row.try_get("duration_hours").map_err(db_error)?)?,
    })
}

fn db_error(e: sqlx::Error) -> CourseError {
    CourseError::DatabaseError(e.to_string())
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn create(&self, course: Course) -> Result<Course, CourseError> {
        sqlx::query(
            r#"
            INSERT INTO courses (id, title, description, category, duration_hours)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(course.id.0)
        .bind(course.title.as_str())
        .bind(course.description.as_str())
        .bind(course.category.as_str())
        .bind(course.duration_hours.value())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(course)
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseError> {
        sqlx::query(
            r#"
            SELECT id, title, description, category, duration_hours
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .map(map_course_row)
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Course>, CourseError> {
        sqlx::query(
            r#"
            SELECT id, title, description, category, duration_hours
            FROM courses
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?
        .into_iter()
        .map(map_course_row)
        .collect()
    }

    async fn update(&self, course: Course) -> Result<Course, CourseError> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET title = $2, description = $3, category = $4, duration_hours = $5
            WHERE id = $1
            "#,
        )
        .bind(course.id.0)
        .bind(course.title.as_str())
        .bind(course.description.as_str())
        .bind(course.category.as_str())
        .bind(course.duration_hours.value())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(CourseError::NotFound(course.id.to_string()));
        }

        Ok(course)
    }

    async fn delete(&self, id: &CourseId) -> Result<(), CourseError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(CourseError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
