use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::codec::TokenCodec;
use super::errors::TokenError;

/// Builds access and refresh tokens for a principal.
///
/// Owns the two lifetime durations, configured independently at
/// construction. The refresh lifetime is expected to be materially longer
/// than the access lifetime; callers choose values where this holds, it is
/// not enforced here.
pub struct TokenIssuer {
    codec: TokenCodec,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(codec: TokenCodec, access_lifetime: Duration, refresh_lifetime: Duration) -> Self {
        Self {
            codec,
            access_lifetime,
            refresh_lifetime,
        }
    }

    /// Mint an access token expiring `access_lifetime` from now.
    pub fn issue_access_token(&self, subject: &str) -> Result<String, TokenError> {
        self.codec
            .encode(&Claims::access(subject, Utc::now(), self.access_lifetime))
    }

    /// Mint a refresh token expiring `refresh_lifetime` from now, tagged
    /// with the refresh kind claim.
    pub fn issue_refresh_token(&self, subject: &str) -> Result<String, TokenError> {
        self.codec
            .encode(&Claims::refresh(subject, Utc::now(), self.refresh_lifetime))
    }

    pub fn access_lifetime(&self) -> Duration {
        self.access_lifetime
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }
}
