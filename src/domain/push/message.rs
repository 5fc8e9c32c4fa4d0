//! Outbound push payload value object

use crate::domain::push::{PushKind, Recipient};

/// The outbound notification payload: title, body, kind, and a resolved
/// recipient. Built per dispatch, serialized by the sender, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Push {
    pub title: String,
    pub body: String,
    pub kind: PushKind,
    pub recipient: Recipient,
}

impl Push {
    /// Create a push of the given kind
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        kind: PushKind,
        recipient: Recipient,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind,
            recipient,
        }
    }

    /// Create a note push, the common case
    pub fn note(title: impl Into<String>, body: impl Into<String>, recipient: Recipient) -> Self {
        Self::new(title, body, PushKind::Note, recipient)
    }
}
