use serde::{Deserialize, Serialize};

/// Maximum accepted length of a session key.
pub const SESSION_ID_MAX_LEN: usize = 128;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("session.invalid_id")]
pub struct InvalidSessionId;

/// Represents a browsing session identifier.
/// Carts are isolated per session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses a caller-supplied session key.
    ///
    /// Accepts 1 to 128 characters of ASCII letters, digits, `-` and `_`.
    pub fn parse(raw: &str) -> Result<Self, InvalidSessionId> {
        let raw = raw.trim();
        if raw.is_empty() || raw.len() > SESSION_ID_MAX_LEN {
            return Err(InvalidSessionId);
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(InvalidSessionId);
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
