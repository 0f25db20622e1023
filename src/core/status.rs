//! User-visible status messages
//!
//! Styling is chosen from the explicit [`MessageKind`] tag, never by looking
//! at the message text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Warning,
    Error,
}

impl MessageKind {
    /// Leading marker shown before the message text
    pub fn prefix(&self) -> &'static str {
        match self {
            MessageKind::Success => "✅",
            MessageKind::Warning => "⚠️",
            MessageKind::Error => "❌",
        }
    }

    /// Text color classes
    pub fn class(&self) -> &'static str {
        match self {
            MessageKind::Success => "text-green-600",
            MessageKind::Warning => "text-amber-600",
            MessageKind::Error => "text-red-600",
        }
    }
}

/// A message plus the kind it was produced as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    /// Build a message; `body` is prefixed with the kind's marker
    pub fn new(kind: MessageKind, body: impl AsRef<str>) -> Self {
        Self {
            kind,
            text: format!("{} {}", kind.prefix(), body.as_ref()),
        }
    }

    pub fn success(body: impl AsRef<str>) -> Self {
        Self::new(MessageKind::Success, body)
    }

    pub fn warning(body: impl AsRef<str>) -> Self {
        Self::new(MessageKind::Warning, body)
    }

    pub fn error(body: impl AsRef<str>) -> Self {
        Self::new(MessageKind::Error, body)
    }
}
