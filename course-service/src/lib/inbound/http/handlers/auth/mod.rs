use serde::Serialize;

pub mod login;
pub mod refresh_token;
pub mod register;

/// Token pair payload returned by both login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponseData {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in_seconds: i64,
    pub login_name: String,
}
