//! Bot credential entity

use std::fmt;

/// Mask a secret for display (show first 4 and last 4 chars)
pub fn mask_token(token: &str) -> String {
    if token.len() <= 8 {
        "*".repeat(token.len())
    } else {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    }
}

/// A named sender credential for the push service.
/// The access token is masked in all formatted output.
#[derive(Clone, PartialEq, Eq)]
pub struct Bot {
    name: String,
    token: String,
}

impl Bot {
    /// Create a new bot credential
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }

    /// The registry key this bot is stored under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw access token, for the `Access-Token` request header
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The token rendered safe for logs and listings
    pub fn masked_token(&self) -> String {
        mask_token(&self.token)
    }
}

impl fmt::Debug for Bot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bot")
            .field("name", &self.name)
            .field("token", &self.masked_token())
            .finish()
    }
}

impl fmt::Display for Bot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.masked_token())
    }
}
