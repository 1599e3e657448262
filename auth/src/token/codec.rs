use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signed token codec.
///
/// Encodes and decodes self-contained HS256 tokens with a single shared
/// secret that drives both signing and verification. Pure computation over
/// the configured key; holds no other state.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec from the shared signing secret.
    ///
    /// The secret comes from configuration, loaded once at process start;
    /// for HS256 it should be at least 32 bytes.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a compact signed token.
    ///
    /// Deterministic for identical claims and identical key.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and fully validate a token: signature, structure, and expiry.
    ///
    /// # Errors
    /// * `EmptyInput` - Token string is empty or blank
    /// * `InvalidSignature` - Signed with a different key
    /// * `Expired` - Expiry timestamp is in the past
    /// * `UnsupportedFormat` - Signed with an unexpected algorithm
    /// * `Malformed` - Anything else that fails to parse
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::EmptyInput);
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation())
            .map_err(map_decode_error)?;

        Ok(token_data.claims)
    }

    /// Decode a token, validating signature and structure but not expiry.
    ///
    /// Lets callers inspect claims of tokens that may already be expired.
    pub fn decode_unverified_exp(&self, token: &str) -> Result<Claims, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::EmptyInput);
        }

        let mut validation = self.validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(map_decode_error)?;

        Ok(token_data.claims)
    }

    /// Check whether a token is expired.
    ///
    /// Fail-closed: any decode failure counts as expired.
    pub fn is_expired(&self, token: &str) -> bool {
        match self.decode_unverified_exp(token) {
            Ok(claims) => claims.is_expired(Utc::now().timestamp()),
            Err(_) => true,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        // No clock-skew allowance; expiry is exact
        validation.leeway = 0;
        validation
    }
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> TokenError {
    match e.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenError::UnsupportedFormat(e.to_string())
        }
        _ => TokenError::Malformed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::token::claims::TokenKind;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_encode_decode_round_trip() {
        let codec = TokenCodec::new(SECRET);
        let claims = Claims::access("ana", Utc::now(), Duration::hours(1));

        let token = codec.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = codec.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_refresh_kind_survives_round_trip() {
        let codec = TokenCodec::new(SECRET);
        let claims = Claims::refresh("ana", Utc::now(), Duration::days(7));

        let token = codec.encode(&claims).expect("Failed to encode token");
        let decoded = codec.decode(&token).expect("Failed to decode token");

        assert_eq!(decoded.kind, Some(TokenKind::Refresh));
    }

    #[test]
    fn test_decode_with_wrong_secret_is_invalid_signature() {
        let codec = TokenCodec::new(SECRET);
        let other = TokenCodec::new(b"another_secret_key_of_32_bytes_ok!");

        let claims = Claims::access("ana", Utc::now(), Duration::hours(1));
        let token = codec.encode(&claims).expect("Failed to encode token");

        assert_eq!(other.decode(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let codec = TokenCodec::new(SECRET);

        assert!(matches!(
            codec.decode("not.a.token"),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_empty_input() {
        let codec = TokenCodec::new(SECRET);

        assert_eq!(codec.decode(""), Err(TokenError::EmptyInput));
        assert_eq!(codec.decode("   "), Err(TokenError::EmptyInput));
    }

    #[test]
    fn test_expired_token_decodes_structurally_but_fails_strict_decode() {
        let codec = TokenCodec::new(SECRET);
        let issued_at = Utc::now() - Duration::hours(2);
        let claims = Claims::access("ana", issued_at, Duration::hours(1));
        let token = codec.encode(&claims).expect("Failed to encode token");

        // Strict decode rejects it
        assert_eq!(codec.decode(&token), Err(TokenError::Expired));

        // Structural decode still yields the claims
        let decoded = codec
            .decode_unverified_exp(&token)
            .expect("Structural decode should succeed");
        assert_eq!(decoded.sub, "ana");
    }

    #[test]
    fn test_is_expired() {
        let codec = TokenCodec::new(SECRET);

        let live = codec
            .encode(&Claims::access("ana", Utc::now(), Duration::hours(1)))
            .unwrap();
        assert!(!codec.is_expired(&live));

        let stale = codec
            .encode(&Claims::access(
                "ana",
                Utc::now() - Duration::hours(2),
                Duration::hours(1),
            ))
            .unwrap();
        assert!(codec.is_expired(&stale));
    }

    #[test]
    fn test_is_expired_fails_closed_on_undecodable_input() {
        let codec = TokenCodec::new(SECRET);

        assert!(codec.is_expired(""));
        assert!(codec.is_expired("garbled"));

        let other = TokenCodec::new(b"another_secret_key_of_32_bytes_ok!");
        let foreign = other
            .encode(&Claims::access("ana", Utc::now(), Duration::hours(1)))
            .unwrap();
        assert!(codec.is_expired(&foreign));
    }
}
