//! # Unit Types
//!
//! Type-safe length wrapper for scaffold geometry. Every dimension in a
//! takeoff is in feet, so a single newtype is enough to keep raw counts
//! and lengths apart.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{format_feet, Feet};
//!
//! let length = Feet(15.0);
//! assert_eq!(length.count_to_cover(Feet(7.0)), 3);
//! assert_eq!(format_feet(7.0), "7.0");
//! assert_eq!(format_feet(6.5), "6.5");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl Feet {
    /// Number of whole `unit` lengths needed to cover this length.
    ///
    /// Ceiling division: any fractional remainder costs one more unit.
    /// Non-positive lengths give zero or a negative count, NaN gives zero.
    pub fn count_to_cover(self, unit: Feet) -> i64 {
        (self.0 / unit.0).ceil() as i64
    }
}

impl fmt::Display for Feet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ft", format_feet(self.0))
    }
}

/// Format a length for material labels and summaries.
///
/// Whole values keep one decimal place (`7.0`), anything else uses the
/// shortest representation that round-trips (`6.5`, `12.25`).
pub fn format_feet(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_to_cover_exact() {
        assert_eq!(Feet(14.0).count_to_cover(Feet(7.0)), 2);
        assert_eq!(Feet(13.0).count_to_cover(Feet(6.5)), 2);
    }

    #[test]
    fn test_count_to_cover_remainder() {
        assert_eq!(Feet(14.1).count_to_cover(Feet(7.0)), 3);
        assert_eq!(Feet(0.5).count_to_cover(Feet(6.5)), 1);
        assert_eq!(Feet(4.2).count_to_cover(Feet(1.0)), 5);
    }

    #[test]
    fn test_count_to_cover_degenerate() {
        assert_eq!(Feet(0.0).count_to_cover(Feet(7.0)), 0);
        assert_eq!(Feet(-7.5).count_to_cover(Feet(7.0)), -1);
        assert_eq!(Feet(f64::NAN).count_to_cover(Feet(7.0)), 0);
    }

    #[test]
    fn test_format_feet() {
        assert_eq!(format_feet(7.0), "7.0");
        assert_eq!(format_feet(14.0), "14.0");
        assert_eq!(format_feet(5.25), "5.25");
        assert_eq!(format_feet(-3.0), "-3.0");
    }

    #[test]
    fn test_display() {
        assert_eq!(Feet(5.0).to_string(), "5.0ft");
        assert_eq!(Feet(6.5).to_string(), "6.5ft");
    }
}
