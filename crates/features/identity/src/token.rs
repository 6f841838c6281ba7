//! Stateless JWT issuance and validation for admin sessions.

use crate::error::IdentityError;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use waymark_domain::config::JwtConfig;
use waymark_kernel::safe_nanoid;

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin username.
    pub sub: String,
    pub iss: String,
    /// Session identifier; must also be present in the session cache.
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and validates session tokens with the configured HS256 secret.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl_seconds: u64,
    clock_skew_seconds: u64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("issuer", &self.issuer)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Builds a codec from the identity configuration.
    ///
    /// # Errors
    /// Returns [`IdentityError::Config`] if the secret is empty or the TTL is zero.
    pub fn new(cfg: &JwtConfig) -> Result<Self, IdentityError> {
        if cfg.secret.trim().is_empty() {
            return Err(IdentityError::Config {
                message: "JWT secret cannot be empty".into(),
                context: None,
            });
        }
        if cfg.ttl_seconds == 0 {
            return Err(IdentityError::Config {
                message: "JWT ttl_seconds must be greater than zero".into(),
                context: None,
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(cfg.secret.as_bytes()),
            issuer: cfg.issuer.clone(),
            ttl_seconds: cfg.ttl_seconds,
            clock_skew_seconds: cfg.clock_skew_seconds,
        })
    }

    /// Token lifetime in seconds, as reported to clients.
    #[must_use]
    pub const fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Issues a fresh token for the given admin.
    ///
    /// # Errors
    /// Returns [`IdentityError::Internal`] if encoding fails.
    pub fn issue(&self, username: &str) -> Result<(String, Claims), IdentityError> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: username.to_owned(),
            iss: self.issuer.clone(),
            jti: safe_nanoid!(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::seconds(self.ttl_seconds.cast_signed())).timestamp(),
        };

        let token =
            encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
                IdentityError::Internal {
                    message: e.to_string().into(),
                    context: Some("Failed to encode token".into()),
                }
            })?;

        Ok((token, claims))
    }

    /// Validates a presented token and returns its claims.
    ///
    /// # Errors
    /// Returns [`IdentityError::Auth`] for expired, tampered, or foreign tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, IdentityError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.clock_skew_seconds;
        validation.set_issuer(&[self.issuer.clone()]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| IdentityError::Auth { message: e.to_string().into(), context: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec(ttl: u64) -> TokenCodec {
        TokenCodec::new(&JwtConfig {
            secret: "test-secret".to_owned(),
            issuer: "waymark-test".to_owned(),
            ttl_seconds: ttl,
            clock_skew_seconds: 0,
        })
        .expect("codec")
    }

    #[test]
    fn issue_and_verify_roundtrip() {
        let codec = codec(60);
        let (token, claims) = codec.issue("admin").expect("issue");

        let verified = codec.verify(&token).expect("verify");
        assert_eq!(verified.sub, "admin");
        assert_eq!(verified.jti, claims.jti);
        assert_eq!(verified.iss, "waymark-test");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let codec = codec(60);
        let (token, _) = codec.issue("admin").expect("issue");

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });
        assert!(codec.verify(&tampered).is_err());
    }

    #[test]
    fn foreign_issuer_is_rejected() {
        let issuing = codec(60);
        let (token, _) = issuing.issue("admin").expect("issue");

        let other = TokenCodec::new(&JwtConfig {
            secret: "test-secret".to_owned(),
            issuer: "someone-else".to_owned(),
            ttl_seconds: 60,
            clock_skew_seconds: 0,
        })
        .expect("codec");
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn empty_secret_is_a_config_error() {
        let err = TokenCodec::new(&JwtConfig {
            secret: "  ".to_owned(),
            issuer: "waymark".to_owned(),
            ttl_seconds: 60,
            clock_skew_seconds: 0,
        })
        .unwrap_err();
        assert!(matches!(err, IdentityError::Config { .. }));
    }
}
