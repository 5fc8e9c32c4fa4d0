//! Recipient classification value object

use std::sync::LazyLock;

use regex::Regex;

/// WHATWG email pattern, anchored. Requires a dotted domain so bare
/// hostnames fall through to the channel tag grammar instead.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

/// Channel tags as the push service accepts them
static CHANNEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("channel pattern compiles"));

/// A classified push recipient
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Deliver to the devices registered under this email address
    Email(String),
    /// Deliver to subscribers of this channel tag
    Channel(String),
    /// Deliver to every device registered under the account
    Broadcast,
}

impl Recipient {
    /// Classify a raw recipient string.
    ///
    /// The email grammar wins over the channel tag grammar; anything
    /// matching neither falls back to broadcasting to all devices.
    pub fn classify(raw: &str) -> Self {
        if EMAIL_PATTERN.is_match(raw) {
            Self::Email(raw.to_string())
        } else if CHANNEL_PATTERN.is_match(raw) {
            Self::Channel(raw.to_string())
        } else {
            Self::Broadcast
        }
    }

    /// Classify an optional recipient; absent means broadcast
    pub fn classify_opt(raw: Option<&str>) -> Self {
        match raw {
            Some(s) => Self::classify(s),
            None => Self::Broadcast,
        }
    }

    /// Get the email address, if this recipient is one
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Email(addr) => Some(addr),
            _ => None,
        }
    }

    /// Get the channel tag, if this recipient is one
    pub fn channel(&self) -> Option<&str> {
        match self {
            Self::Channel(tag) => Some(tag),
            _ => None,
        }
    }

    /// Whether this recipient broadcasts to all devices
    pub fn is_broadcast(&self) -> bool {
        matches!(self, Self::Broadcast)
    }
}
