use thiserror::Error;

/// Field-level validation error for course attributes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CourseFieldError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be at most {max} characters, got {actual}")]
    TitleTooLong { max: usize, actual: usize },

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Category is required")]
    CategoryRequired,

    #[error("Category must be at most {max} characters, got {actual}")]
    CategoryTooLong { max: usize, actual: usize },

    #[error("Duration must be greater than zero")]
    DurationNotPositive,
}

impl CourseFieldError {
    /// The request field the violation applies to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TitleRequired | Self::TitleTooLong { .. } => "title",
            Self::DescriptionRequired => "description",
            Self::CategoryRequired | Self::CategoryTooLong { .. } => "category",
            Self::DurationNotPositive => "durationHours",
        }
    }
}

/// Error for CourseId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CourseIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all course operations
#[derive(Debug, Clone, Error)]
pub enum CourseError {
    #[error("Invalid course ID: {0}")]
    InvalidCourseId(#[from] CourseIdError),

    #[error("Invalid course field: {0}")]
    InvalidField(#[from] CourseFieldError),

    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
