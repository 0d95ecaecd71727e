//! The pencil simulation engine.
//!
//! A [`Pencil`] owns three bounded durability counters (point, length and
//! eraser) plus the construction-time snapshot of each. Writing wears the
//! point, erasing wears the eraser, sharpening trades one unit of length for a
//! fresh point. Every operation is infallible: when a counter runs out the
//! rest of the call degrades to spaces or leaves the text as it was.
//!
//! Text is handled per `char`. All string results have the same number of
//! `char`s as the text they were derived from.

use tracing::debug;

use crate::status::PencilSnapshot;

/// Point durability of a freshly constructed default pencil.
pub const DEFAULT_POINT_DURABILITY: u32 = 100;

/// Length of a freshly constructed default pencil.
pub const DEFAULT_LENGTH: u32 = 10;

/// Eraser durability of a freshly constructed default pencil.
pub const DEFAULT_ERASER_DURABILITY: u32 = 50;

/// Character left behind when an edit writes over a non-space character.
pub const COLLISION_MARKER: char = '@';

/// Point cost of writing an uppercase letter.
pub const UPPERCASE_COST: u32 = 2;

/// Point cost of writing a lowercase letter.
pub const LOWERCASE_COST: u32 = 1;

/// Returns how much point durability writing `c` consumes.
///
/// A letter counts as uppercase when uppercasing leaves it unchanged, so
/// letters without case (CJK, for one) cost as much as capitals. Every other
/// letter costs 1. Whitespace, digits and punctuation are free.
#[must_use]
pub fn point_cost(c: char) -> u32 {
    if !c.is_alphabetic() {
        0
    } else if c.to_uppercase().eq(std::iter::once(c)) {
        UPPERCASE_COST
    } else {
        LOWERCASE_COST
    }
}

/// A pencil whose point, length and eraser wear out with use.
///
/// Invariants, held before and after every operation:
/// - `point_durability <= initial_point_durability`
/// - `length <= initial_length`
/// - `eraser_durability <= initial_eraser_durability`
/// - the `initial_*` values never change after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pencil {
    point_durability: u32,
    length: u32,
    eraser_durability: u32,
    initial_point_durability: u32,
    initial_length: u32,
    initial_eraser_durability: u32,
}

impl Default for Pencil {
    fn default() -> Self {
        Self::new(
            DEFAULT_POINT_DURABILITY,
            DEFAULT_LENGTH,
            DEFAULT_ERASER_DURABILITY,
        )
    }
}

impl Pencil {
    /// Creates a pencil with the given starting capacities.
    ///
    /// Zero is a valid capacity and simply means that resource is already
    /// exhausted.
    #[must_use]
    pub const fn new(point_durability: u32, length: u32, eraser_durability: u32) -> Self {
        Self {
            point_durability,
            length,
            eraser_durability,
            initial_point_durability: point_durability,
            initial_length: length,
            initial_eraser_durability: eraser_durability,
        }
    }

    /// Remaining capacity to write characters.
    #[must_use]
    pub const fn point_durability(&self) -> u32 {
        self.point_durability
    }

    /// Remaining physical length, consumed by sharpening.
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Remaining capacity to erase characters.
    #[must_use]
    pub const fn eraser_durability(&self) -> u32 {
        self.eraser_durability
    }

    /// Point durability at construction; the sharpening ceiling.
    #[must_use]
    pub const fn initial_point_durability(&self) -> u32 {
        self.initial_point_durability
    }

    /// Length at construction.
    #[must_use]
    pub const fn initial_length(&self) -> u32 {
        self.initial_length
    }

    /// Eraser durability at construction.
    #[must_use]
    pub const fn initial_eraser_durability(&self) -> u32 {
        self.initial_eraser_durability
    }

    /// Returns true while the point can still write.
    #[must_use]
    pub const fn is_sharp(&self) -> bool {
        self.point_durability > 0
    }

    /// Returns true while the eraser can still erase.
    #[must_use]
    pub const fn can_erase(&self) -> bool {
        self.eraser_durability > 0
    }

    /// Returns true if there is length left and the point is not already at
    /// full durability.
    #[must_use]
    pub const fn can_sharpen(&self) -> bool {
        self.length > 0 && self.point_durability < self.initial_point_durability
    }

    /// Captures a read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> PencilSnapshot {
        PencilSnapshot::from(self)
    }

    /// Writes `text`, returning what actually ends up on the paper.
    ///
    /// Once the point goes dull every remaining character comes out as a
    /// space. An uppercase letter that needs more durability than is left
    /// is written as a space and dulls the point completely.
    pub fn write(&mut self, text: &str) -> String {
        let started_sharp = self.is_sharp();
        let produced: String = text.chars().map(|c| self.write_char(c)).collect();

        if started_sharp && !self.is_sharp() {
            debug!(
                requested = text.chars().count(),
                "point went dull while writing"
            );
        }
        produced
    }

    /// Writes a single character, charging its point cost.
    fn write_char(&mut self, c: char) -> char {
        if self.point_durability == 0 {
            return ' ';
        }

        let cost = point_cost(c);
        if cost > self.point_durability {
            self.point_durability = 0;
            return ' ';
        }
        self.point_durability -= cost;
        c
    }

    /// Restores the point to full durability at the cost of one unit of
    /// length.
    ///
    /// Returns false and leaves the pencil untouched when it cannot be
    /// sharpened.
    pub fn sharpen(&mut self) -> bool {
        if !self.can_sharpen() {
            return false;
        }

        self.point_durability = self.initial_point_durability;
        self.length -= 1;
        debug!(length = self.length, "pencil sharpened");
        true
    }

    /// Erases the last occurrence of `target` in `text`.
    ///
    /// Each erased character costs one unit of eraser durability. When the
    /// eraser cannot cover the whole occurrence, only its leading characters
    /// are replaced with spaces and the trailing fragment stays on the paper.
    /// An empty target, a missing occurrence or a worn eraser all return the
    /// text unchanged.
    pub fn erase(&mut self, text: &str, target: &str) -> String {
        if !self.can_erase() || target.is_empty() {
            return text.to_string();
        }

        let Some(start) = text.rfind(target) else {
            return text.to_string();
        };
        let end = start + target.len();

        let target_chars = target.chars().count();
        let budget = u32::try_from(target_chars)
            .map_or(self.eraser_durability, |n| n.min(self.eraser_durability));
        self.eraser_durability -= budget;

        let erased = budget as usize;
        if erased < target_chars {
            debug!(
                erased,
                requested = target_chars,
                "eraser wore out mid-erase"
            );
        }

        let mut result = String::with_capacity(text.len());
        result.push_str(&text[..start]);
        result.extend(std::iter::repeat(' ').take(erased));
        result.extend(target.chars().skip(erased));
        result.push_str(&text[end..]);
        result
    }

    /// Writes `new_text` over `text` starting at char index `position`.
    ///
    /// A space in `text` is written into exactly as [`Pencil::write`] would.
    /// Any other character collides with the new one and becomes
    /// [`COLLISION_MARKER`] at a cost of one point. Overlaying stops as soon
    /// as the point is dull; characters outside the overlaid range, or past
    /// the end of `text`, are left alone.
    pub fn edit(&mut self, text: &str, new_text: &str, position: usize) -> String {
        if !self.is_sharp() {
            return text.to_string();
        }

        let mut cells: Vec<char> = text.chars().collect();
        let requested = new_text.chars().count();
        let mut applied = 0usize;

        for (cell, c) in cells.iter_mut().skip(position).zip(new_text.chars()) {
            if self.point_durability == 0 {
                break;
            }

            *cell = if *cell == ' ' {
                self.write_char(c)
            } else {
                self.point_durability -= 1;
                COLLISION_MARKER
            };
            applied += 1;
        }

        if applied < requested && !self.is_sharp() {
            debug!(applied, requested, "point went dull while editing");
        }
        cells.into_iter().collect()
    }

    /// Restores all three counters to their construction-time values.
    pub fn reset(&mut self) {
        self.point_durability = self.initial_point_durability;
        self.length = self.initial_length;
        self.eraser_durability = self.initial_eraser_durability;
        debug!("pencil reset");
    }
}
