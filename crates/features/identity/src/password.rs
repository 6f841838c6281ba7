//! Argon2id password hashing for stored admin credentials.

use crate::error::IdentityError;
use argon2::Argon2;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    rand_core::OsRng,
};

/// Hashes a plaintext password with a fresh random salt.
///
/// # Errors
/// Returns [`IdentityError::Internal`] if the hasher rejects the input.
pub fn hash_password(plain: &str) -> Result<String, IdentityError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| IdentityError::Internal {
            message: format!("Failed to hash password: {e}").into(),
            context: None,
        })?;
    Ok(hash.to_string())
}

/// Verifies a candidate password against a stored hash.
///
/// A wrong password is `Ok(false)`; only a malformed stored hash or a hasher
/// fault is an error.
///
/// # Errors
/// Returns [`IdentityError::Internal`] if the stored hash cannot be parsed.
pub fn verify_password(stored_hash: &str, candidate: &str) -> Result<bool, IdentityError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| IdentityError::Internal {
        message: format!("Invalid stored password hash: {e}").into(),
        context: None,
    })?;

    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(IdentityError::Internal {
            message: format!("Failed to verify password: {e}").into(),
            context: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("hunter2").expect("hash");
        assert!(hash.starts_with("$argon2"));

        assert!(verify_password(&hash, "hunter2").expect("verify"));
        assert!(!verify_password(&hash, "hunter3").expect("verify"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same-input").expect("hash");
        let b = hash_password("same-input").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let err = verify_password("not-a-phc-string", "anything").unwrap_err();
        assert!(matches!(err, IdentityError::Internal { .. }));
    }
}
