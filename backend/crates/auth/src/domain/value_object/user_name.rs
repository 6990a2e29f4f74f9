//! User Name Value Object
//!
//! The login handle. Compared byte-for-byte: no case folding and no
//! trimming, so `"alice"` and `"Alice"` are different accounts.

use derive_more::Display;

use crate::error::{AuthError, AuthResult};

/// Maximum length in characters
pub const USER_NAME_MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct UserName(String);

impl UserName {
    /// Validate user input
    ///
    /// ## Errors
    /// `InvalidInput` when empty or longer than [`USER_NAME_MAX_LENGTH`]
    pub fn new(raw: impl Into<String>) -> AuthResult<Self> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(AuthError::InvalidInput("username is required".to_string()));
        }

        if raw.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AuthError::InvalidInput(format!(
                "username must be at most {USER_NAME_MAX_LENGTH} characters"
            )));
        }

        Ok(Self(raw))
    }

    /// Accept a name to look up at login
    ///
    /// Only presence is checked; a name longer than any stored one simply
    /// matches no account.
    ///
    /// ## Errors
    /// `InvalidInput` when empty
    pub fn for_lookup(raw: impl Into<String>) -> AuthResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(AuthError::InvalidInput("username is required".to_string()));
        }
        Ok(Self(raw))
    }

    /// Rebuild from a stored value (already validated on the way in)
    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_name() {
        let name = UserName::new("alice").unwrap();
        assert_eq!(name.as_str(), "alice");
        assert_eq!(name.to_string(), "alice");
    }

    #[test]
    fn test_empty_user_name() {
        assert!(matches!(
            UserName::new(""),
            Err(AuthError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_too_long_user_name() {
        let long = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(UserName::new(long), Err(AuthError::InvalidInput(_))));
    }

    #[test]
    fn test_lookup_skips_length_limit() {
        let long = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert_eq!(UserName::for_lookup(long.clone()).unwrap().as_str(), long);
        assert!(matches!(
            UserName::for_lookup(""),
            Err(AuthError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_case_is_preserved() {
        assert_ne!(UserName::new("Alice").unwrap(), UserName::new("alice").unwrap());
    }
}
