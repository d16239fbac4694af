use std::fmt;

use super::error::DomainError;

/// Matrix room ID, e.g. `!abcdef:example.org`.
///
/// Only the sigil is checked; newer room versions drop the server part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        match value.strip_prefix('!') {
            Some(rest) if !rest.is_empty() && !rest.contains(char::is_whitespace) => {
                Ok(Self(value))
            }
            _ => Err(DomainError::InvalidRoomId(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
