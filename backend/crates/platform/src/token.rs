//! Signed Bearer Tokens
//!
//! HS256 JSON Web Tokens binding a subject string to the process signing
//! secret. Tokens carry no expiry unless the codec is built with a TTL.
//!
//! Verification pins the algorithm: a token whose header names anything
//! other than HS256 is rejected before its signature is looked at.

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

const ALGORITHM: Algorithm = Algorithm::HS256;

// ============================================================================
// Signing secret
// ============================================================================

/// Process-wide token signing secret
///
/// Zeroized on drop, redacted in `Debug`, no `Display`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningSecret(Vec<u8>);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenConfigError {
    #[error("Token signing secret must not be empty")]
    EmptySecret,
}

impl SigningSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, TokenConfigError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(TokenConfigError::EmptySecret);
        }
        Ok(Self(bytes))
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningSecret").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Claims
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<u64>,
}

// ============================================================================
// Rejection
// ============================================================================

/// Why a presented token was not accepted
///
/// Callers treat every variant the same way (deny); the distinction exists
/// for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejected {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature does not verify")]
    BadSignature,

    #[error("token uses an unexpected signing algorithm")]
    AlgorithmMismatch,

    #[error("token has expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenRejected {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::InvalidSignature => TokenRejected::BadSignature,
            JwtErrorKind::InvalidAlgorithm | JwtErrorKind::InvalidAlgorithmName => {
                TokenRejected::AlgorithmMismatch
            }
            JwtErrorKind::ExpiredSignature => TokenRejected::Expired,
            _ => TokenRejected::Malformed,
        }
    }
}

/// A token could not be produced
///
/// Only reachable with a broken key, so callers treat it as a server fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenIssueError {
    #[error("token could not be signed")]
    Signing,
}

// ============================================================================
// Codec
// ============================================================================

/// Issues and verifies bearer tokens
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Option<Duration>,
}

impl TokenCodec {
    /// Build a codec
    ///
    /// ## Arguments
    /// * `secret` - HMAC key
    /// * `ttl` - `None` issues tokens without `exp` (never expire)
    pub fn new(secret: &SigningSecret, ttl: Option<Duration>) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = ttl.is_some();
        validation.required_spec_claims = if ttl.is_some() {
            HashSet::from(["sub".to_string(), "exp".to_string()])
        } else {
            HashSet::from(["sub".to_string()])
        };

        Self {
            encoding: EncodingKey::from_secret(&secret.0),
            decoding: DecodingKey::from_secret(&secret.0),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Issue a token for `subject`
    pub fn issue(&self, subject: &str) -> Result<String, TokenIssueError> {
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: self.ttl.map(|ttl| now.saturating_add(ttl.as_secs())),
        };

        jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, &self.encoding).map_err(|e| {
            // Never carries the secret
            tracing::error!(error = %e, "Token encoding failed");
            TokenIssueError::Signing
        })
    }

    /// Verify a presented token and return its subject
    ///
    /// Every failure, including malformed base64/JSON and a foreign
    /// algorithm, comes back as [`TokenRejected`].
    pub fn verify(&self, token: &str) -> Result<String, TokenRejected> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)?;
        if data.claims.sub.is_empty() {
            return Err(TokenRejected::Malformed);
        }
        Ok(data.claims.sub)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &ALGORITHM)
            .field("ttl", &self.ttl)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    const SUBJECT: &str = "5f0c1e9a-4a57-4c1e-9c55-1f8a7e3b2d10";

    fn codec() -> TokenCodec {
        TokenCodec::new(&SigningSecret::new("test-secret").unwrap(), None)
    }

    #[test]
    fn test_issue_and_verify() {
        let codec = codec();
        let token = codec.issue(SUBJECT).unwrap();
        assert_eq!(token.split('.').count(), 3);
        assert_eq!(codec.verify(&token).unwrap(), SUBJECT);
    }

    #[test]
    fn test_issue_error_is_not_a_rejection() {
        let issue = TokenIssueError::Signing.to_string();
        for rejected in [
            TokenRejected::Malformed,
            TokenRejected::BadSignature,
            TokenRejected::AlgorithmMismatch,
            TokenRejected::Expired,
        ] {
            assert_ne!(issue, rejected.to_string());
        }
        assert_eq!(issue, "token could not be signed");
    }

    #[test]
    fn test_no_expiry_by_default() {
        let token = codec().issue(SUBJECT).unwrap();
        let payload = token.split('.').nth(1).unwrap();
        let json: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap();
        assert_eq!(json["sub"], SUBJECT);
        assert!(json.get("exp").is_none());
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = codec().issue(SUBJECT).unwrap();
        let other = TokenCodec::new(&SigningSecret::new("another-secret").unwrap(), None);
        assert_eq!(other.verify(&token), Err(TokenRejected::BadSignature));
    }

    #[test]
    fn test_tampering_any_character_rejected() {
        let codec = codec();
        let token = codec.issue(SUBJECT).unwrap();

        for (i, original) in token.char_indices() {
            let replacement = if original == 'A' { 'B' } else { 'A' };
            let mut tampered = token.clone();
            tampered.replace_range(i..i + 1, &replacement.to_string());
            assert!(
                codec.verify(&tampered).is_err(),
                "tampered token at index {i} was accepted"
            );
        }
    }

    #[test]
    fn test_structural_garbage_rejected() {
        let codec = codec();
        for garbage in ["", "abc", "a.b", "a.b.c", "a.b.c.d", "...", "Bearer x"] {
            assert_eq!(codec.verify(garbage), Err(TokenRejected::Malformed), "{garbage}");
        }
    }

    #[test]
    fn test_algorithm_confusion_rejected() {
        let secret = SigningSecret::new("test-secret").unwrap();
        let claims = Claims {
            sub: SUBJECT.to_string(),
            iat: 0,
            exp: None,
        };
        let hs512 = jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(&secret.0),
        )
        .unwrap();

        assert_eq!(
            codec().verify(&hs512),
            Err(TokenRejected::AlgorithmMismatch)
        );
    }

    #[test]
    fn test_unsigned_token_rejected() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"{SUBJECT}","iat":0}}"#));
        let token = format!("{header}.{payload}.");

        assert!(codec().verify(&token).is_err());
    }

    #[test]
    fn test_missing_subject_rejected() {
        let secret = SigningSecret::new("test-secret").unwrap();
        let token = jsonwebtoken::encode(
            &Header::new(ALGORITHM),
            &serde_json::json!({ "iat": 0 }),
            &EncodingKey::from_secret(&secret.0),
        )
        .unwrap();

        assert!(codec().verify(&token).is_err());
    }

    #[test]
    fn test_ttl_sets_expiry() {
        let codec = TokenCodec::new(
            &SigningSecret::new("test-secret").unwrap(),
            Some(Duration::from_secs(3600)),
        );
        let token = codec.issue(SUBJECT).unwrap();
        assert_eq!(codec.verify(&token).unwrap(), SUBJECT);
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = SigningSecret::new("test-secret").unwrap();
        let codec = TokenCodec::new(&secret, Some(Duration::from_secs(60)));
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            sub: SUBJECT.to_string(),
            iat: now - 120,
            exp: Some(now - 60),
        };
        let token =
            jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, &EncodingKey::from_secret(&secret.0))
                .unwrap();

        assert_eq!(codec.verify(&token), Err(TokenRejected::Expired));
    }

    #[test]
    fn test_ttl_codec_requires_expiry() {
        // A never-expiring token must not pass once expiry is switched on
        let token = codec().issue(SUBJECT).unwrap();
        let strict = TokenCodec::new(
            &SigningSecret::new("test-secret").unwrap(),
            Some(Duration::from_secs(60)),
        );
        assert!(strict.verify(&token).is_err());
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert_eq!(
            SigningSecret::new(Vec::new()).unwrap_err(),
            TokenConfigError::EmptySecret
        );
    }

    #[test]
    fn test_debug_never_shows_secret() {
        let secret = SigningSecret::new("do-not-print-me").unwrap();
        assert!(!format!("{:?}", secret).contains("do-not-print-me"));
        let codec = TokenCodec::new(&secret, None);
        assert!(!format!("{:?}", codec).contains("do-not-print-me"));
    }
}
