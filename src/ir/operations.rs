//! Pencil operation definitions and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The top-level IR wrapper for all pencil operations.
///
/// Every operation is wrapped in this struct to provide:
/// - Format versioning so old journals can be recognised
/// - Request tracking via unique IDs
/// - Timestamp for the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PencilIR {
    /// Format version (e.g., "1.0").
    pub version: String,

    /// Unique identifier for this request.
    pub request_id: Uuid,

    /// When this IR was created.
    pub timestamp: DateTime<Utc>,

    /// The operation to execute.
    pub operation: Operation,
}

impl PencilIR {
    /// Current format version.
    pub const CURRENT_VERSION: &'static str = "1.0";

    /// Creates a new IR with the given operation.
    pub fn new(operation: Operation) -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            operation,
        }
    }

    /// Sets a custom request ID (useful for correlation).
    #[must_use]
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }

    /// Shorthand for a WRITE of `text`.
    pub fn write(text: impl Into<String>) -> Self {
        Self::new(Operation::Write(WritePayload { text: text.into() }))
    }

    /// Shorthand for a SHARPEN.
    pub fn sharpen() -> Self {
        Self::new(Operation::Sharpen)
    }

    /// Shorthand for an ERASE of `target`.
    pub fn erase(target: impl Into<String>) -> Self {
        Self::new(Operation::Erase(ErasePayload {
            target: target.into(),
        }))
    }

    /// Shorthand for an EDIT writing `text` at `position`.
    pub fn edit(text: impl Into<String>, position: usize) -> Self {
        Self::new(Operation::Edit(EditPayload {
            text: text.into(),
            position,
        }))
    }

    /// Shorthand for a RESET.
    pub fn reset() -> Self {
        Self::new(Operation::Reset)
    }

    /// Shorthand for a CLEAR_PAPER.
    pub fn clear_paper() -> Self {
        Self::new(Operation::ClearPaper)
    }
}

/// All supported pencil operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "payload", rename_all = "snake_case")]
pub enum Operation {
    /// Write text at the end of the paper.
    Write(WritePayload),

    /// Sharpen the pencil.
    Sharpen,

    /// Erase the last occurrence of a substring of the paper.
    Erase(ErasePayload),

    /// Overlay text onto the paper at a char position.
    Edit(EditPayload),

    /// Restore the pencil and start on a blank sheet.
    Reset,

    /// Start on a blank sheet without touching the pencil.
    ClearPaper,
}

impl Operation {
    /// Stable lowercase name, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Write(_) => "write",
            Self::Sharpen => "sharpen",
            Self::Erase(_) => "erase",
            Self::Edit(_) => "edit",
            Self::Reset => "reset",
            Self::ClearPaper => "clear_paper",
        }
    }
}

/// Payload for WRITE operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritePayload {
    /// Text to write.
    pub text: String,
}

/// Payload for ERASE operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErasePayload {
    /// Substring whose last occurrence is erased.
    pub target: String,
}

/// Payload for EDIT operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPayload {
    /// Text to overlay.
    pub text: String,

    /// Char index on the paper where the overlay starts.
    #[serde(default)]
    pub position: usize,
}
