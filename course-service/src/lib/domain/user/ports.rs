use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for principal domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new principal.
    ///
    /// Hashes the password, applies the role and enabled defaults, and
    /// persists the record.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Login name is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve a principal by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Principal does not exist
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve a principal by unique login name.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No principal with this login name
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Retrieve all principals.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Update a principal's profile (email, role, enabled).
    ///
    /// # Errors
    /// * `NotFound` - Principal does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Remove a principal.
    ///
    /// # Errors
    /// * `NotFound` - Principal does not exist
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for the principal aggregate (the credential
/// store).
///
/// Uniqueness of login name and email must be guaranteed by the store
/// itself under concurrent registration, not only by application-level
/// checks.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new principal.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Login name is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    async fn create(&self, user: User) -> Result<User, UserError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Update an existing principal.
    ///
    /// # Errors
    /// * `NotFound` - Principal does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove a principal.
    ///
    /// # Errors
    /// * `NotFound` - Principal does not exist
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
