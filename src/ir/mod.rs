//! Intermediate Representation (IR) for pencil operations.
//!
//! The IR is a serializable form of every operation a session can apply to
//! its paper. It is what the session journal records, which makes a run of
//! operations loggable and replayable.

mod operations;
mod serialization;
mod validation;

pub use operations::{EditPayload, ErasePayload, Operation, PencilIR, WritePayload};

pub use serialization::{from_json, journal_from_json, journal_to_json, to_json_pretty};
pub use validation::MAX_TEXT_LEN;
