//! Command Result Model
//!
//! Every evaluated command line produces exactly one `CommandResult`: a
//! success payload for display, or a failure carrying a diagnostic message.
//! The rendering layer distinguishes only the two kinds and shows the
//! embedded text either way, so failure diagnostics are full displayable
//! strings rather than error flags.

use serde::{Deserialize, Serialize};

/// Tagged outcome of evaluating one command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum CommandResult {
    /// Command succeeded; the payload is the display value
    Success(String),
    /// Command failed; the payload is a diagnostic shown verbatim
    Failure(String),
}

impl CommandResult {
    /// Build a success result
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    /// Build a failure result
    pub fn failure(text: impl Into<String>) -> Self {
        Self::Failure(text.into())
    }

    /// Check if this is a success result
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if this is a failure result
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The displayable text regardless of kind
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }
}
