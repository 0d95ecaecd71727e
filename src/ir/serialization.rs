//! IR serialization helpers.
//!
//! Serde already provides JSON serialization. This module centralizes the
//! helpers used for single operations and whole session journals and keeps
//! formatting stable.

use crate::error::PencilError;
use crate::ir::operations::PencilIR;

/// Serialize an IR to pretty JSON.
pub fn to_json_pretty(ir: &PencilIR) -> Result<String, PencilError> {
    serde_json::to_string_pretty(ir)
        .map_err(|e| PencilError::serialization(format!("serialize IR: {e}")))
}

/// Deserialize an IR from JSON.
///
/// Callers should then invoke `ir.validate()` before executing.
pub fn from_json(s: &str) -> Result<PencilIR, PencilError> {
    serde_json::from_str::<PencilIR>(s)
        .map_err(|e| PencilError::serialization(format!("deserialize IR: {e}")))
}

/// Serialize a journal (a sequence of IR) to a JSON array.
pub fn journal_to_json(journal: &[PencilIR]) -> Result<String, PencilError> {
    serde_json::to_string(journal)
        .map_err(|e| PencilError::serialization(format!("serialize journal: {e}")))
}

/// Deserialize a journal from a JSON array.
pub fn journal_from_json(s: &str) -> Result<Vec<PencilIR>, PencilError> {
    serde_json::from_str::<Vec<PencilIR>>(s)
        .map_err(|e| PencilError::serialization(format!("deserialize journal: {e}")))
}
