//! Password hashing and the account password policy.
//!
//! Hashes are Argon2id in PHC string form, so parameters and salt travel
//! with the stored hash. The policy applied to admin-set passwords (account
//! creation and resets) lives here as well, next to the hashing it guards.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; `Err` is reserved for malformed hashes and
/// other verification failures.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Apply the account password policy.
///
/// Length is counted in characters, not bytes, so multibyte passwords are
/// not over-credited. Surrounding whitespace does not count toward the
/// minimum. The error string is suitable for returning to the caller.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.trim().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trips_and_uses_argon2id() {
        let hash = hash_password("olive-branch-quarterly").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("olive-branch-quarterly", &hash).expect("verify should succeed"));
    }

    #[test]
    fn mismatch_is_ok_false_not_err() {
        let hash = hash_password("olive-branch-quarterly").expect("hashing should succeed");
        let verified = verify_password("different-password!", &hash).expect("verify should succeed");
        assert!(!verified);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn policy_rejects_short_passwords() {
        let msg = validate_password_strength("eleven_char").unwrap_err();
        assert!(msg.contains("at least 12 characters"));
    }

    #[test]
    fn policy_ignores_surrounding_whitespace() {
        // Padding must not buy length.
        assert!(validate_password_strength("   eleven_char   ").is_err());
    }

    #[test]
    fn policy_counts_characters_not_bytes() {
        // Eleven multibyte characters are more than twelve bytes but still
        // under the minimum.
        assert!(validate_password_strength("ééééééééééé").is_err());
        assert!(validate_password_strength("twelve_chars").is_ok());
    }
}
