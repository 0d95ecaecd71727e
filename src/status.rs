//! Derived wear report for a pencil.
//!
//! Nothing here is stored on the engine. Every value is recomputed from the
//! counters so it can never drift from them.

use serde::{Deserialize, Serialize};

use crate::pencil::Pencil;

/// Point durability below which a sharp pencil is reported as getting dull.
pub const GETTING_DULL_THRESHOLD: u32 = 20;

/// How usable the point currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointCondition {
    /// No durability left; writing only produces spaces.
    Dull,
    /// Still writes, but below [`GETTING_DULL_THRESHOLD`].
    GettingDull,
    /// Plenty of durability left.
    Sharp,
}

impl PointCondition {
    /// Classifies a point durability value.
    #[must_use]
    pub const fn from_durability(point_durability: u32) -> Self {
        if point_durability == 0 {
            Self::Dull
        } else if point_durability < GETTING_DULL_THRESHOLD {
            Self::GettingDull
        } else {
            Self::Sharp
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dull => "Dull - needs sharpening",
            Self::GettingDull => "Getting dull",
            Self::Sharp => "Sharp and ready",
        }
    }
}

impl std::fmt::Display for PointCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse wear band of a counter relative to its initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WearLevel {
    /// More than 60% remaining.
    Healthy,
    /// More than 30% remaining.
    Worn,
    /// 30% or less remaining, or nothing to begin with.
    Critical,
}

impl WearLevel {
    /// Classifies `value` out of `max`.
    #[must_use]
    pub fn classify(value: u32, max: u32) -> Self {
        if max == 0 {
            return Self::Critical;
        }
        // Integer form of value/max > 0.6 and > 0.3.
        let scaled = u64::from(value) * 10;
        let max = u64::from(max);
        if scaled > max * 6 {
            Self::Healthy
        } else if scaled > max * 3 {
            Self::Worn
        } else {
            Self::Critical
        }
    }
}

/// Read-only view of a pencil at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PencilSnapshot {
    /// Current point durability.
    pub point_durability: u32,
    /// Current length.
    pub length: u32,
    /// Current eraser durability.
    pub eraser_durability: u32,
    /// Point durability at construction.
    pub initial_point_durability: u32,
    /// Length at construction.
    pub initial_length: u32,
    /// Eraser durability at construction.
    pub initial_eraser_durability: u32,
    /// Whether the point can write.
    pub is_sharp: bool,
    /// Whether the eraser can erase.
    pub can_erase: bool,
    /// Whether sharpening would succeed.
    pub can_sharpen: bool,
    /// Condition of the point.
    pub condition: PointCondition,
    /// Wear band of the point.
    pub point_wear: WearLevel,
    /// Wear band of the length.
    pub length_wear: WearLevel,
    /// Wear band of the eraser.
    pub eraser_wear: WearLevel,
}

impl From<&Pencil> for PencilSnapshot {
    fn from(pencil: &Pencil) -> Self {
        Self {
            point_durability: pencil.point_durability(),
            length: pencil.length(),
            eraser_durability: pencil.eraser_durability(),
            initial_point_durability: pencil.initial_point_durability(),
            initial_length: pencil.initial_length(),
            initial_eraser_durability: pencil.initial_eraser_durability(),
            is_sharp: pencil.is_sharp(),
            can_erase: pencil.can_erase(),
            can_sharpen: pencil.can_sharpen(),
            condition: PointCondition::from_durability(pencil.point_durability()),
            point_wear: WearLevel::classify(
                pencil.point_durability(),
                pencil.initial_point_durability(),
            ),
            length_wear: WearLevel::classify(pencil.length(), pencil.initial_length()),
            eraser_wear: WearLevel::classify(
                pencil.eraser_durability(),
                pencil.initial_eraser_durability(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_condition_bands() {
        assert_eq!(PointCondition::from_durability(0), PointCondition::Dull);
        assert_eq!(PointCondition::from_durability(1), PointCondition::GettingDull);
        assert_eq!(PointCondition::from_durability(19), PointCondition::GettingDull);
        assert_eq!(PointCondition::from_durability(20), PointCondition::Sharp);
    }

    #[test]
    fn point_condition_labels() {
        assert_eq!(PointCondition::Dull.to_string(), "Dull - needs sharpening");
        assert_eq!(PointCondition::GettingDull.label(), "Getting dull");
        assert_eq!(PointCondition::Sharp.label(), "Sharp and ready");
    }

    #[test]
    fn wear_level_bands() {
        assert_eq!(WearLevel::classify(100, 100), WearLevel::Healthy);
        assert_eq!(WearLevel::classify(61, 100), WearLevel::Healthy);
        assert_eq!(WearLevel::classify(60, 100), WearLevel::Worn);
        assert_eq!(WearLevel::classify(31, 100), WearLevel::Worn);
        assert_eq!(WearLevel::classify(30, 100), WearLevel::Critical);
        assert_eq!(WearLevel::classify(0, 100), WearLevel::Critical);
        assert_eq!(WearLevel::classify(0, 0), WearLevel::Critical);
        assert_eq!(WearLevel::classify(u32::MAX, u32::MAX), WearLevel::Healthy);
    }

    #[test]
    fn snapshot_reflects_pencil() {
        let mut pencil = Pencil::new(100, 10, 50);
        pencil.write("Hello World");
        let erased = pencil.erase("Hello World", "World");
        assert_eq!(erased, "Hello      ");

        let snapshot = pencil.snapshot();
        assert_eq!(snapshot.point_durability, 87);
        assert_eq!(snapshot.eraser_durability, 45);
        assert_eq!(snapshot.initial_point_durability, 100);
        assert!(snapshot.is_sharp);
        assert!(snapshot.can_erase);
        assert!(snapshot.can_sharpen);
        assert_eq!(snapshot.condition, PointCondition::Sharp);
        assert_eq!(snapshot.point_wear, WearLevel::Healthy);
        assert_eq!(snapshot.eraser_wear, WearLevel::Healthy);
    }

    #[test]
    fn snapshot_of_exhausted_pencil() {
        let snapshot = Pencil::new(0, 0, 0).snapshot();
        assert!(!snapshot.is_sharp);
        assert!(!snapshot.can_erase);
        assert!(!snapshot.can_sharpen);
        assert_eq!(snapshot.condition, PointCondition::Dull);
        assert_eq!(snapshot.length_wear, WearLevel::Critical);
    }

    #[test]
    fn snapshot_serializes_snake_case() {
        let json = serde_json::to_value(Pencil::new(10, 1, 1).snapshot()).unwrap();
        assert_eq!(json["condition"], "getting_dull");
        assert_eq!(json["point_wear"], "healthy");
        assert_eq!(json["can_sharpen"], false);
    }
}
