//! Password hashing and strength checks.
//!
//! Hashes are Argon2id in PHC string form, so parameters and salt travel
//! with the hash and can be re-tuned later without a migration.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Shortest password accepted at registration and password change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check a plaintext password against a stored PHC hash.
///
/// `Ok(false)` means the hash parsed but the password did not match;
/// any other failure (malformed hash, unsupported params) is an `Err`.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(other) => Err(other),
    }
}

/// Reject passwords shorter than `min_length` characters.
///
/// The error string is shown to the user as-is.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_verifies() {
        let hash = hash_password("orchard-gate-7").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("orchard-gate-7", &hash).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("orchard-gate-7").unwrap();

        assert!(!verify_password("orchard-gate-8", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("same-input").unwrap();
        let second = hash_password("same-input").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn short_password_is_rejected_with_reason() {
        let err = validate_password_strength("short", MIN_PASSWORD_LENGTH).unwrap_err();

        assert!(err.contains("at least 8 characters"));
    }

    #[test]
    fn boundary_length_password_passes() {
        assert!(validate_password_strength("8chars!!", MIN_PASSWORD_LENGTH).is_ok());
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Five multibyte characters must not pass as eight bytes.
        assert!(validate_password_strength("ééééé", MIN_PASSWORD_LENGTH).is_err());
    }
}
