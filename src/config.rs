//! Construction configuration for a pencil.
//!
//! Capacities arrive as signed integers so that callers feeding in
//! arbitrary numbers (JSON, form fields) never fail to construct a pencil.
//! Negative values saturate to zero, which behaves exactly like a resource
//! that is already exhausted.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PencilError, PencilResult};
use crate::pencil::{
    Pencil, DEFAULT_ERASER_DURABILITY, DEFAULT_LENGTH, DEFAULT_POINT_DURABILITY,
};

/// Starting capacities for a [`Pencil`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PencilConfig {
    /// Starting point durability.
    pub point_durability: i64,
    /// Starting length.
    pub length: i64,
    /// Starting eraser durability.
    pub eraser_durability: i64,
}

impl Default for PencilConfig {
    fn default() -> Self {
        Self {
            point_durability: i64::from(DEFAULT_POINT_DURABILITY),
            length: i64::from(DEFAULT_LENGTH),
            eraser_durability: i64::from(DEFAULT_ERASER_DURABILITY),
        }
    }
}

impl PencilConfig {
    /// Creates a config with explicit capacities.
    #[must_use]
    pub const fn new(point_durability: i64, length: i64, eraser_durability: i64) -> Self {
        Self {
            point_durability,
            length,
            eraser_durability,
        }
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> PencilResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PencilError::serialization(format!("deserialize pencil config: {e}")))
    }

    /// Builds a pencil, saturating each capacity into the `u32` range.
    #[must_use]
    pub fn build(&self) -> Pencil {
        Pencil::new(
            saturate("point_durability", self.point_durability),
            saturate("length", self.length),
            saturate("eraser_durability", self.eraser_durability),
        )
    }
}

impl From<&Pencil> for PencilConfig {
    fn from(pencil: &Pencil) -> Self {
        Self {
            point_durability: i64::from(pencil.initial_point_durability()),
            length: i64::from(pencil.initial_length()),
            eraser_durability: i64::from(pencil.initial_eraser_durability()),
        }
    }
}

fn saturate(field: &'static str, value: i64) -> u32 {
    let clamped = u32::try_from(value).unwrap_or(if value < 0 { 0 } else { u32::MAX });
    if i64::from(clamped) != value {
        warn!(field, value, clamped, "pencil capacity out of range, clamped");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_default_pencil() {
        assert_eq!(PencilConfig::default().build(), Pencil::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = PencilConfig::from_json(r#"{"point_durability": 3}"#).unwrap();
        assert_eq!(config, PencilConfig::new(3, 10, 50));

        let empty = PencilConfig::from_json("{}").unwrap();
        assert_eq!(empty, PencilConfig::default());
    }

    #[test]
    fn negative_capacities_saturate_to_zero() {
        let pencil = PencilConfig::new(-5, -1, -100).build();
        assert_eq!(pencil, Pencil::new(0, 0, 0));
        assert!(!pencil.is_sharp());
        assert!(!pencil.can_erase());
        assert!(!pencil.can_sharpen());
    }

    #[test]
    fn oversized_capacities_saturate_to_max() {
        let pencil = PencilConfig::new(i64::MAX, 1, 1).build();
        assert_eq!(pencil.point_durability(), u32::MAX);
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = PencilConfig::from_json(r#"{"length": "long"}"#).unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn config_from_pencil_uses_initial_values() {
        let mut pencil = Pencil::new(40, 4, 8);
        pencil.write("worn");
        assert_eq!(PencilConfig::from(&pencil), PencilConfig::new(40, 4, 8));
    }
}
