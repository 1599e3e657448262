use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenCodec;
use crate::token::TokenError;
use crate::token::TokenIssuer;

/// Fixed token-type label returned with every issued pair.
pub const TOKEN_TYPE: &str = "Bearer";

/// Credential verifier: password verification plus token minting.
///
/// Combines the password hasher and the token issuer behind the operations
/// the login and refresh flows need. Stateless apart from the configured
/// secret and lifetimes; safe to share across requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    issuer: TokenIssuer,
}

/// Access/refresh pair minted on successful login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    /// Access-token lifetime in seconds
    pub expires_in: i64,
}

/// New access token minted from a presented refresh token.
///
/// The refresh token itself is not rotated; callers echo back the one that
/// was presented.
#[derive(Debug, Clone)]
pub struct RefreshGrant {
    pub subject: String,
    pub access_token: String,
    pub expires_in: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Presented token failed validation. The wrapped detail is for logs
    /// only and must not reach API callers.
    #[error("Invalid or expired token")]
    InvalidToken(#[source] TokenError),

    #[error("Token is not a refresh token")]
    NotRefreshToken,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(TokenError),
}

impl Authenticator {
    /// Create an authenticator from the shared secret and the two token
    /// lifetimes.
    ///
    /// All three are explicit configuration values passed in at
    /// construction; nothing is read from ambient state.
    pub fn new(secret: &[u8], access_lifetime: Duration, refresh_lifetime: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            issuer: TokenIssuer::new(TokenCodec::new(secret), access_lifetime, refresh_lifetime),
        }
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against the stored hash and mint a token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash could not be parsed
    /// * `Token` - Token minting failed
    pub fn login(
        &self,
        subject: &str,
        password: &str,
        stored_hash: &str,
    ) -> Result<TokenPair, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self
            .issuer
            .issue_access_token(subject)
            .map_err(AuthenticationError::Token)?;
        let refresh_token = self
            .issuer
            .issue_refresh_token(subject)
            .map_err(AuthenticationError::Token)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: TOKEN_TYPE,
            expires_in: self.access_lifetime_secs(),
        })
    }

    /// Mint a new access token from a presented refresh token.
    ///
    /// The token must decode cleanly and carry the refresh kind claim; the
    /// presented refresh token stays valid (no rotation).
    ///
    /// # Errors
    /// * `InvalidToken` - Expired, malformed, or wrongly signed
    /// * `NotRefreshToken` - Valid token without the refresh kind claim
    /// * `Token` - Minting the new access token failed
    pub fn refresh(&self, refresh_token: &str) -> Result<RefreshGrant, AuthenticationError> {
        let claims = self
            .issuer
            .codec()
            .decode(refresh_token)
            .map_err(AuthenticationError::InvalidToken)?;

        if !claims.is_refresh() {
            return Err(AuthenticationError::NotRefreshToken);
        }

        let access_token = self
            .issuer
            .issue_access_token(&claims.sub)
            .map_err(AuthenticationError::Token)?;

        Ok(RefreshGrant {
            subject: claims.sub,
            access_token,
            expires_in: self.access_lifetime_secs(),
        })
    }

    /// Strict decode for request-time validation: signature, structure,
    /// and expiry.
    pub fn decode_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.issuer.codec().decode(token)
    }

    pub fn access_lifetime_secs(&self) -> i64 {
        self.issuer.access_lifetime().num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET, Duration::hours(1), Duration::days(7))
    }

    #[test]
    fn test_login_success() {
        let auth = authenticator();
        let hash = auth.hash_password("p@ss").expect("Failed to hash password");

        let pair = auth.login("ana", "p@ss", &hash).expect("Login failed");

        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, 3600);

        let claims = auth.decode_token(&pair.access_token).unwrap();
        assert_eq!(claims.sub, "ana");
        assert!(!claims.is_refresh());
    }

    #[test]
    fn test_login_wrong_password() {
        let auth = authenticator();
        let hash = auth.hash_password("p@ss").unwrap();

        let result = auth.login("ana", "wrong", &hash);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_refresh_mints_new_access_token() {
        let auth = authenticator();
        let hash = auth.hash_password("p@ss").unwrap();
        let pair = auth.login("ana", "p@ss", &hash).unwrap();

        let grant = auth.refresh(&pair.refresh_token).expect("Refresh failed");

        assert_eq!(grant.subject, "ana");
        let claims = auth.decode_token(&grant.access_token).unwrap();
        assert_eq!(claims.sub, "ana");
        assert!(!claims.is_refresh());
    }

    #[test]
    fn test_refresh_rejects_access_token() {
        let auth = authenticator();
        let hash = auth.hash_password("p@ss").unwrap();
        let pair = auth.login("ana", "p@ss", &hash).unwrap();

        let result = auth.refresh(&pair.access_token);
        assert!(matches!(result, Err(AuthenticationError::NotRefreshToken)));
    }

    #[test]
    fn test_refresh_rejects_garbled_token() {
        let auth = authenticator();

        let result = auth.refresh("garbled-token");
        assert!(matches!(result, Err(AuthenticationError::InvalidToken(_))));
    }

    #[test]
    fn test_refresh_rejects_foreign_signature() {
        let auth = authenticator();
        let other = Authenticator::new(
            b"another_secret_key_of_32_bytes_ok!",
            Duration::hours(1),
            Duration::days(7),
        );
        let hash = other.hash_password("p@ss").unwrap();
        let pair = other.login("ana", "p@ss", &hash).unwrap();

        let result = auth.refresh(&pair.refresh_token);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidToken(
                TokenError::InvalidSignature
            ))
        ));
    }
}
