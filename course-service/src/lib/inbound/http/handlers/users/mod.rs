use serde::Serialize;

use crate::domain::user::models::User;

pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

/// Principal as exposed over the API, password hash stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseData {
    pub id: String,
    pub login_name: String,
    pub email: String,
    pub enabled: bool,
    pub role: String,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            login_name: user.username.to_string(),
            email: user.email.as_str().to_string(),
            enabled: user.enabled,
            role: user.role.to_string(),
        }
    }
}
