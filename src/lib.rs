//! # pencilsim - Pencil Durability Simulation
//!
//! pencilsim models the wear of a physical pencil as it writes, erases and
//! edits text. Three bounded counters decide what actually reaches the paper:
//!
//! - **Point durability**: consumed per letter written (uppercase 2, lowercase 1)
//! - **Length**: consumed by sharpening, which restores the point
//! - **Eraser durability**: consumed per character erased
//!
//! When a counter runs out the operation degrades instead of failing: a dull
//! point writes spaces, a worn eraser leaves the tail of a word behind, and
//! an edit over existing text leaves `@` collisions.
//!
//! ## Usage
//!
//! ```rust
//! use pencilsim::Pencil;
//!
//! let mut pencil = Pencil::new(100, 10, 50);
//! let paper = pencil.write("Hello World");
//! assert_eq!(pencil.point_durability(), 87);
//!
//! let paper = pencil.erase(&paper, "World");
//! assert_eq!(paper, "Hello      ");
//!
//! let paper = pencil.edit(&paper, "Earth", 6);
//! assert_eq!(paper, "Hello Earth");
//! ```
//!
//! A [`Session`] keeps the paper alongside the pencil and journals every
//! operation as serializable [`PencilIR`]; [`SharedPencil`] guards a pencil
//! with a single lock for use across threads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Engine
pub mod pencil;
pub mod status;

// Configuration and errors
pub mod config;
pub mod error;

// Operations, journal, and sharing
pub mod ir;
pub mod session;
pub mod shared;

// Re-export primary types at crate root for convenience
pub use config::PencilConfig;
pub use error::{PencilError, PencilResult, ValidationError};
pub use pencil::{
	point_cost, Pencil, COLLISION_MARKER, DEFAULT_ERASER_DURABILITY, DEFAULT_LENGTH,
	DEFAULT_POINT_DURABILITY, LOWERCASE_COST, UPPERCASE_COST,
};
pub use status::{PencilSnapshot, PointCondition, WearLevel, GETTING_DULL_THRESHOLD};

pub use ir::{
	from_json, journal_from_json, journal_to_json, to_json_pretty, EditPayload, ErasePayload,
	Operation, PencilIR, WritePayload, MAX_TEXT_LEN,
};
pub use session::{Outcome, Session, SessionResponse};
pub use shared::SharedPencil;
