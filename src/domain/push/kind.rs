//! Push kind value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidKindError;

/// Kind of push sent to the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PushKind {
    /// Plain text note, the common case
    #[default]
    Note,
    /// Note whose body is treated as a link by receiving devices
    Link,
}

impl PushKind {
    /// Get the wire value used for the `type` field
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Link => "link",
        }
    }
}

impl FromStr for PushKind {
    type Err = InvalidKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "note" => Ok(Self::Note),
            "link" => Ok(Self::Link),
            _ => Err(InvalidKindError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PushKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
