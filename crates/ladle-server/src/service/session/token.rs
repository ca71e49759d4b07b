//! Opaque session token generation.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;

/// Number of random bytes backing a token.
const TOKEN_BYTES: usize = 32;

/// An opaque, unguessable session token.
///
/// Tokens carry no information: they are 32 bytes of OS randomness encoded
/// as URL-safe base64, unrelated to the credentials of the session they
/// identify.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh random token.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Returns the token as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SessionToken> for String {
    #[inline]
    fn from(token: SessionToken) -> Self {
        token.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tokens_are_unique() {
        let tokens: HashSet<String> = (0..256)
            .map(|_| SessionToken::generate().into())
            .collect();
        assert_eq!(tokens.len(), 256);
    }

    #[test]
    fn tokens_are_url_safe() {
        let token = SessionToken::generate();
        // 32 bytes of entropy encode to 43 characters without padding.
        assert_eq!(token.as_str().len(), 43);
        assert!(
            token
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn tokens_do_not_embed_credentials() {
        // Regression guard for the credential-derived token shape: nothing
        // the caller knows goes into the token.
        let token = SessionToken::generate();
        assert!(!token.as_str().contains(':'));
    }
}
