use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Discriminates refresh tokens from access tokens.
///
/// Access tokens carry no kind claim at all; only refresh tokens are tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "REFRESH")]
    Refresh,
}

/// Signed token payload: subject identity, issue time, expiry time, and an
/// optional kind tag.
///
/// Tokens are self-contained and never persisted; expiry is the only
/// invalidation mechanism.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (login name of the principal)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp), always after `iat`
    pub exp: i64,

    /// Kind tag, present only on refresh tokens
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<TokenKind>,
}

impl Claims {
    /// Claims for an access token expiring `lifetime` after `issued_at`.
    pub fn access(subject: impl Into<String>, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            sub: subject.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
            kind: None,
        }
    }

    /// Claims for a refresh token, tagged with the refresh kind.
    pub fn refresh(
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            kind: Some(TokenKind::Refresh),
            ..Self::access(subject, issued_at, lifetime)
        }
    }

    pub fn is_refresh(&self) -> bool {
        self.kind == Some(TokenKind::Refresh)
    }

    /// Check expiry against the given Unix timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
