//! Authentication library
//!
//! Reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - Signed token encoding, decoding, and issuance (access + refresh)
//! - Credential verification coordinating the two
//!
//! The signing secret and the token lifetimes are explicit constructor
//! arguments; nothing in here reads global or ambient configuration.
//!
//! # Examples
//!
//! ## Login and token validation
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::hours(1),
//!     Duration::days(7),
//! );
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("p@ss").unwrap();
//!
//! // Login: verify and mint an access/refresh pair
//! let pair = auth.login("ana", "p@ss", &hash).unwrap();
//! assert_eq!(pair.token_type, "Bearer");
//!
//! // Per-request: validate the access token
//! let claims = auth.decode_token(&pair.access_token).unwrap();
//! assert_eq!(claims.sub, "ana");
//!
//! // Later: mint a fresh access token from the refresh token
//! let grant = auth.refresh(&pair.refresh_token).unwrap();
//! assert_eq!(grant.subject, "ana");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::RefreshGrant;
pub use authenticator::TokenPair;
pub use authenticator::TOKEN_TYPE;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenKind;
