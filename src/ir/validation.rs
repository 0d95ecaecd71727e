//! IR validation.
//!
//! Payloads are validated before they reach the engine. The engine itself
//! accepts anything; these checks reject input the session would otherwise
//! silently ignore, and bound the size of journal entries.

use crate::error::ValidationError;
use crate::ir::operations::{EditPayload, ErasePayload, Operation, PencilIR, WritePayload};

/// Upper bound, in bytes, for any text field.
pub const MAX_TEXT_LEN: usize = 16 * 1024;

/// Validate a text field that must contain something other than whitespace.
fn validate_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField {
            field: field.to_string(),
        });
    }
    if value.len() > MAX_TEXT_LEN {
        return Err(ValidationError::FieldTooLong {
            field: field.to_string(),
            max_length: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

impl WritePayload {
    /// Validates this payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text("text", &self.text)
    }
}

impl ErasePayload {
    /// Validates this payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text("target", &self.target)
    }
}

impl EditPayload {
    /// Validates this payload.
    ///
    /// The position can only be checked against a concrete paper, see
    /// [`EditPayload::validate_position`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_text("text", &self.text)
    }

    /// Rejects positions past the end of a paper of `paper_len` chars.
    ///
    /// A position equal to the length is accepted; the overlay is then a
    /// no-op.
    pub fn validate_position(&self, paper_len: usize) -> Result<(), ValidationError> {
        if self.position > paper_len {
            return Err(ValidationError::PositionOutOfBounds {
                position: self.position,
                length: paper_len,
            });
        }
        Ok(())
    }
}

impl Operation {
    /// Validate the operation payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Write(p) => p.validate(),
            Self::Erase(p) => p.validate(),
            Self::Edit(p) => p.validate(),
            Self::Sharpen | Self::Reset | Self::ClearPaper => Ok(()),
        }
    }
}

impl PencilIR {
    /// Validate the IR envelope and its operation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.version != Self::CURRENT_VERSION {
            return Err(ValidationError::UnsupportedVersion {
                version: self.version.clone(),
                expected: Self::CURRENT_VERSION.to_string(),
            });
        }
        self.operation.validate()
    }
}
