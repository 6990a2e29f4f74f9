//! User Password Value Object
//!
//! Domain wrappers over `platform::password`. [`RawPassword`] is request
//! input (zeroized on drop); [`UserPassword`] is the stored Argon2id hash.

use platform::password::{
    ClearTextPassword, HashParams, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// ## Errors
    /// `InvalidInput` when empty or oversize
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::Empty => AuthError::InvalidInput("password is required".into()),
            PasswordPolicyError::TooLong { .. } => AuthError::InvalidInput(e.to_string()),
        })?;

        Ok(Self(clear_text))
    }

    /// Accept a password presented at login
    ///
    /// Returns `None` for a password over the length limit: no stored hash
    /// can have been made from it, so it is a mismatch rather than bad input.
    ///
    /// ## Errors
    /// `InvalidInput` when empty
    pub fn for_verification(raw: String) -> AuthResult<Option<Self>> {
        match ClearTextPassword::new(raw) {
            Ok(clear_text) => Ok(Some(Self(clear_text))),
            Err(PasswordPolicyError::Empty) => {
                Err(AuthError::InvalidInput("password is required".into()))
            }
            Err(PasswordPolicyError::TooLong { .. }) => Ok(None),
        }
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password. CPU- and memory-heavy; call off the async
    /// executor.
    pub fn from_raw(
        raw: &RawPassword,
        params: &HashParams,
        pepper: Option<&[u8]>,
    ) -> AuthResult<Self> {
        let hashed = raw.0.hash(params, pepper).map_err(|e| match e {
            PasswordHashError::InvalidParams(msg) => {
                AuthError::Internal(format!("Password hashing misconfigured: {msg}"))
            }
            other => AuthError::Internal(other.to_string()),
        })?;

        Ok(Self(hashed))
    }

    /// Rebuild from the stored PHC string
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time check of `raw` against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_invalid_input() {
        assert!(matches!(
            RawPassword::new(String::new()),
            Err(AuthError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_oversize_password_at_login_is_not_input_error() {
        let oversize = "a".repeat(platform::password::MAX_PASSWORD_LENGTH + 1);
        assert!(RawPassword::new(oversize.clone()).is_err());
        assert!(RawPassword::for_verification(oversize).unwrap().is_none());
        assert!(matches!(
            RawPassword::for_verification(String::new()),
            Err(AuthError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, &HashParams::fast(), None).unwrap();

        assert!(hashed.verify(&raw, None));
        let wrong = RawPassword::new("wrong".to_string()).unwrap();
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_bad_params_are_internal() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let params = HashParams {
            memory_kib: 1,
            iterations: 0,
            parallelism: 0,
        };
        assert!(matches!(
            UserPassword::from_raw(&raw, &params, None),
            Err(AuthError::Internal(_))
        ));
    }

    #[test]
    fn test_corrupt_stored_hash() {
        assert!(matches!(
            UserPassword::from_phc_string("plaintext-by-mistake"),
            Err(AuthError::Internal(_))
        ));
    }
}
