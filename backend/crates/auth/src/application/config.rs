//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup,
//! shared as `Arc<AuthConfig>`, never mutated.

use std::fmt;

use platform::password::HashParams;
use platform::token::TokenCodec;

#[derive(Clone)]
pub struct AuthConfig {
    /// Bearer token signer/verifier (holds the signing secret)
    pub tokens: TokenCodec,
    /// Argon2id work factor for new hashes
    pub hash_params: HashParams,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(tokens: TokenCodec) -> Self {
        Self {
            tokens,
            hash_params: HashParams::default(),
            password_pepper: None,
        }
    }

    pub fn with_hash_params(mut self, hash_params: HashParams) -> Self {
        self.hash_params = hash_params;
        self
    }

    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("tokens", &self.tokens)
            .field("hash_params", &self.hash_params)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::token::SigningSecret;

    #[test]
    fn test_debug_redacts_secrets() {
        let secret = SigningSecret::new("jwt-secret-value").unwrap();
        let config = AuthConfig::new(TokenCodec::new(&secret, None)).with_pepper("pepper-value");

        let debug = format!("{:?}", config);
        assert!(!debug.contains("jwt-secret-value"));
        assert!(!debug.contains("pepper-value"));
        assert_eq!(config.pepper(), Some(&b"pepper-value"[..]));
    }
}
