//! A sheet of paper and the pencil writing on it.
//!
//! The [`Session`] is a synchronous executor for [`PencilIR`]: it validates
//! each operation, applies it to the pencil and the paper, and appends it to
//! an in-memory journal. Replaying a journal against a fresh pencil built
//! from the same configuration reproduces the same paper and counters.

use serde::Serialize;
use tracing::debug;

use crate::config::PencilConfig;
use crate::error::{PencilError, PencilResult};
use crate::ir::{Operation, PencilIR};
use crate::pencil::Pencil;
use crate::status::PencilSnapshot;

/// What an executed operation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Text was appended to the paper.
    Written {
        /// What the pencil actually produced (spaces once the point is dull).
        produced: String,
    },

    /// A sharpen was attempted.
    Sharpened {
        /// Whether the pencil was eligible and got sharpened.
        sharpened: bool,
    },

    /// An erase was attempted.
    Erased,

    /// An edit was attempted.
    Edited,

    /// The pencil was restored and the paper cleared.
    Reset,

    /// The paper was cleared.
    PaperCleared,
}

/// Result of executing one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponse {
    /// What the operation did.
    pub outcome: Outcome,
    /// The paper after the operation.
    pub paper: String,
    /// The pencil after the operation.
    pub snapshot: PencilSnapshot,
}

/// A pencil, the paper it writes on, and the journal of applied operations.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pencil: Pencil,
    paper: String,
    journal: Vec<PencilIR>,
}

impl Session {
    /// Creates a session with a blank sheet.
    #[must_use]
    pub fn new(pencil: Pencil) -> Self {
        Self {
            pencil,
            paper: String::new(),
            journal: Vec::new(),
        }
    }

    /// Creates a session with a pencil built from `config`.
    #[must_use]
    pub fn from_config(config: &PencilConfig) -> Self {
        Self::new(config.build())
    }

    /// Rebuilds a session by executing `journal` against a fresh pencil.
    pub fn replay<I>(config: &PencilConfig, journal: I) -> PencilResult<Self>
    where
        I: IntoIterator<Item = PencilIR>,
    {
        let mut session = Self::from_config(config);
        for ir in journal {
            session.execute(ir)?;
        }
        Ok(session)
    }

    /// The pencil.
    #[must_use]
    pub const fn pencil(&self) -> &Pencil {
        &self.pencil
    }

    /// Current paper contents.
    #[must_use]
    pub fn paper(&self) -> &str {
        &self.paper
    }

    /// Every successfully executed operation, oldest first.
    #[must_use]
    pub fn journal(&self) -> &[PencilIR] {
        &self.journal
    }

    /// Drains the journal, leaving the pencil and the paper as they are.
    ///
    /// Replaying the concatenation of every drained batch reproduces the
    /// current state.
    pub fn take_journal(&mut self) -> Vec<PencilIR> {
        std::mem::take(&mut self.journal)
    }

    /// Validates and executes one operation.
    ///
    /// Failed validation leaves the pencil, the paper and the journal
    /// untouched.
    pub fn execute(&mut self, ir: PencilIR) -> PencilResult<SessionResponse> {
        ir.validate().map_err(PencilError::from)?;

        let outcome = match &ir.operation {
            Operation::Write(payload) => {
                let produced = self.pencil.write(&payload.text);
                self.paper.push_str(&produced);
                Outcome::Written { produced }
            }
            Operation::Sharpen => Outcome::Sharpened {
                sharpened: self.pencil.sharpen(),
            },
            Operation::Erase(payload) => {
                self.paper = self.pencil.erase(&self.paper, &payload.target);
                Outcome::Erased
            }
            Operation::Edit(payload) => {
                payload.validate_position(self.paper.chars().count())?;
                self.paper = self
                    .pencil
                    .edit(&self.paper, &payload.text, payload.position);
                Outcome::Edited
            }
            Operation::Reset => {
                self.pencil.reset();
                self.paper.clear();
                Outcome::Reset
            }
            Operation::ClearPaper => {
                self.paper.clear();
                Outcome::PaperCleared
            }
        };

        debug!(
            request_id = %ir.request_id,
            op = ir.operation.name(),
            point = self.pencil.point_durability(),
            length = self.pencil.length(),
            eraser = self.pencil.eraser_durability(),
            "executed pencil operation"
        );
        self.journal.push(ir);

        Ok(SessionResponse {
            outcome,
            paper: self.paper.clone(),
            snapshot: self.pencil.snapshot(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn write_appends_to_paper() {
        let mut session = Session::default();
        session.execute(PencilIR::write("Hello")).unwrap();
        let response = session.execute(PencilIR::write(" World")).unwrap();

        assert_eq!(response.paper, "Hello World");
        assert_eq!(
            response.outcome,
            Outcome::Written {
                produced: " World".to_string()
            }
        );
        assert_eq!(response.snapshot.point_durability, 87);
    }

    #[test]
    fn dull_write_appends_spaces() {
        let mut session = Session::new(Pencil::new(3, 10, 50));
        let response = session.execute(PencilIR::write("hello")).unwrap();
        assert_eq!(session.paper(), "hel  ");
        assert!(!response.snapshot.is_sharp);
    }

    #[test]
    fn erase_and_edit_operate_on_paper() {
        let mut session = Session::default();
        session.execute(PencilIR::write("Hello World")).unwrap();
        session.execute(PencilIR::erase("World")).unwrap();
        assert_eq!(session.paper(), "Hello      ");

        let response = session.execute(PencilIR::edit("Earth", 6)).unwrap();
        assert_eq!(response.outcome, Outcome::Edited);
        assert_eq!(response.paper, "Hello Earth");
        assert_eq!(response.snapshot.eraser_durability, 45);
    }

    #[test]
    fn sharpen_reports_result() {
        let mut session = Session::default();
        let response = session.execute(PencilIR::sharpen()).unwrap();
        assert_eq!(response.outcome, Outcome::Sharpened { sharpened: false });

        session.execute(PencilIR::write("abc")).unwrap();
        let response = session.execute(PencilIR::sharpen()).unwrap();
        assert_eq!(response.outcome, Outcome::Sharpened { sharpened: true });
        assert_eq!(response.snapshot.length, 9);
    }

    #[test]
    fn edit_position_past_paper_is_rejected() {
        let mut session = Session::default();
        session.execute(PencilIR::write("Hi")).unwrap();

        let err = session.execute(PencilIR::edit("x", 3)).unwrap_err();
        assert!(matches!(
            err,
            PencilError::Validation(ValidationError::PositionOutOfBounds {
                position: 3,
                length: 2
            })
        ));
        assert_eq!(session.journal().len(), 1);
        assert_eq!(session.pencil().point_durability(), 97);
    }

    #[test]
    fn edit_at_end_of_paper_is_noop() {
        let mut session = Session::default();
        session.execute(PencilIR::write("Hi")).unwrap();
        let response = session.execute(PencilIR::edit("x", 2)).unwrap();
        assert_eq!(response.paper, "Hi");
        assert_eq!(response.snapshot.point_durability, 97);
    }

    #[test]
    fn blank_input_is_rejected_without_side_effects() {
        let mut session = Session::default();
        let err = session.execute(PencilIR::write("  ")).unwrap_err();
        assert!(err.is_validation());
        assert!(session.journal().is_empty());
        assert_eq!(session.paper(), "");
    }

    #[test]
    fn reset_clears_paper_and_restores_pencil() {
        let mut session = Session::default();
        session.execute(PencilIR::write("Hello")).unwrap();
        session.execute(PencilIR::erase("lo")).unwrap();

        let response = session.execute(PencilIR::reset()).unwrap();
        assert_eq!(response.outcome, Outcome::Reset);
        assert_eq!(response.paper, "");
        assert_eq!(session.pencil(), &Pencil::default());
    }

    #[test]
    fn clear_paper_keeps_wear() {
        let mut session = Session::default();
        session.execute(PencilIR::write("Hello")).unwrap();

        let response = session.execute(PencilIR::clear_paper()).unwrap();
        assert_eq!(response.outcome, Outcome::PaperCleared);
        assert_eq!(response.paper, "");
        assert_eq!(response.snapshot.point_durability, 94);
    }

    #[test]
    fn journal_records_executed_operations() {
        let mut session = Session::default();
        let write = PencilIR::write("abc");
        let id = write.request_id;
        session.execute(write).unwrap();
        session.execute(PencilIR::sharpen()).unwrap();

        assert_eq!(session.journal().len(), 2);
        assert_eq!(session.journal()[0].request_id, id);
    }

    #[test]
    fn take_journal_drains_without_touching_state() {
        let mut session = Session::default();
        session.execute(PencilIR::write("Hello")).unwrap();
        session.execute(PencilIR::erase("lo")).unwrap();
        let pencil = session.pencil().clone();

        let drained = session.take_journal();
        assert_eq!(drained.len(), 2);
        assert!(session.journal().is_empty());
        assert_eq!(session.paper(), "Hel  ");
        assert_eq!(session.pencil(), &pencil);

        session.execute(PencilIR::sharpen()).unwrap();
        assert_eq!(session.journal().len(), 1);

        let replayed = Session::replay(&PencilConfig::default(), drained).unwrap();
        assert_eq!(replayed.paper(), "Hel  ");
    }

    #[test]
    fn replay_reproduces_state() {
        let config = PencilConfig::new(20, 2, 4);
        let mut session = Session::from_config(&config);
        session.execute(PencilIR::write("Hello World")).unwrap();
        session.execute(PencilIR::erase("World")).unwrap();
        session.execute(PencilIR::sharpen()).unwrap();
        session.execute(PencilIR::edit("There", 6)).unwrap();

        let replayed = Session::replay(&config, session.journal().to_vec()).unwrap();
        assert_eq!(replayed.paper(), session.paper());
        assert_eq!(replayed.pencil(), session.pencil());
        assert_eq!(replayed.journal(), session.journal());
    }

    #[test]
    fn response_serializes_with_outcome_tag() {
        let mut session = Session::default();
        let response = session.execute(PencilIR::write("hi")).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["outcome"]["kind"], "written");
        assert_eq!(json["outcome"]["produced"], "hi");
        assert_eq!(json["paper"], "hi");
    }
}
