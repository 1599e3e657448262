use std::fmt;

use uuid::Uuid;

use crate::domain::course::errors::CourseFieldError;
use crate::domain::course::errors::CourseIdError;

/// Course aggregate entity, the resource the authentication gate protects.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: CourseId,
    pub title: CourseTitle,
    pub description: CourseDescription,
    pub category: CourseCategory,
    pub duration_hours: DurationHours,
}

/// Course unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(pub Uuid);

impl CourseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, CourseIdError> {
        Uuid::parse_str(s)
            .map(CourseId)
            .map_err(|e| CourseIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Course title, non-blank and at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTitle(String);

impl CourseTitle {
    const MAX_LENGTH: usize = 200;

    pub fn new(title: String) -> Result<Self, CourseFieldError> {
        if title.trim().is_empty() {
            return Err(CourseFieldError::TitleRequired);
        }
        if title.len() > Self::MAX_LENGTH {
            return Err(CourseFieldError::TitleTooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            });
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Course description, free text but non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDescription(String);

impl CourseDescription {
    pub fn new(description: String) -> Result<Self, CourseFieldError> {
        if description.trim().is_empty() {
            return Err(CourseFieldError::DescriptionRequired);
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Course category, non-blank and at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCategory(String);

impl CourseCategory {
    const MAX_LENGTH: usize = 50;

    pub fn new(category: String) -> Result<Self, CourseFieldError> {
        if category.trim().is_empty() {
            return Err(CourseFieldError::CategoryRequired);
        }
        if category.len() > Self::MAX_LENGTH {
            return Err(CourseFieldError::CategoryTooLong {
                max: Self::MAX_LENGTH,
                actual: category.len(),
            });
        }
        Ok(Self(category))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Course duration in hours, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationHours(i32);

impl DurationHours {
    pub fn new(hours: i32) -> Result<Self, CourseFieldError> {
        if hours <= 0 {
            return Err(CourseFieldError::DurationNotPositive);
        }
        Ok(Self(hours))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Command to create a new course with validated fields.
#[derive(Debug)]
pub struct CreateCourseCommand {
    pub title: CourseTitle,
    pub description: CourseDescription,
    pub category: CourseCategory,
    pub duration_hours: DurationHours,
}

/// Command to replace an existing course's fields.
///
/// Updates are full replacements; every field is required, same as create.
#[derive(Debug)]
pub struct UpdateCourseCommand {
    pub title: CourseTitle,
    pub description: CourseDescription,
    pub category: CourseCategory,
    pub duration_hours: DurationHours,
}
