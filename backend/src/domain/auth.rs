//! Bearer token primitives.
//!
//! Raw tokens only live in memory for the duration of a request and are
//! zeroed on drop. Persistence stores and compares the SHA-256 fingerprint
//! returned by [`AccessToken::fingerprint`].

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Reasons a presented token is rejected before any lookup happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessTokenValidationError {
    /// Token was missing or blank.
    Empty,
    /// Token contained whitespace.
    ContainsWhitespace,
}

impl fmt::Display for AccessTokenValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "access token must not be empty"),
            Self::ContainsWhitespace => write!(f, "access token must not contain whitespace"),
        }
    }
}

impl std::error::Error for AccessTokenValidationError {}

/// Opaque bearer token presented by a client.
///
/// # Examples
/// ```
/// use acronyms_backend::domain::AccessToken;
///
/// let token = AccessToken::new("s3cr3t").expect("valid token");
/// assert_eq!(token.fingerprint().len(), 64);
/// assert!(AccessToken::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Validate a raw token value.
    pub fn new(raw: impl Into<String>) -> Result<Self, AccessTokenValidationError> {
        let raw = Zeroizing::new(raw.into());
        if raw.trim().is_empty() {
            return Err(AccessTokenValidationError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(AccessTokenValidationError::ContainsWhitespace);
        }
        Ok(Self(raw))
    }

    /// Lower-case hex SHA-256 digest of the token, as stored at rest.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.0.as_bytes()))
    }

    /// Raw token value.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
