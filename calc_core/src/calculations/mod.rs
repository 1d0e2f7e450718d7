//! # Scaffold Calculations
//!
//! Each scaffold type follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Takeoff results (JSON-serializable)
//! - `compute(input) -> *Result` - Pure calculation function
//!
//! Validation of raw request values happens before these functions are
//! called, in [`crate::api`].
//!
//! ## Available Calculations
//!
//! - [`facade`] - Facade scaffold bill of materials
//! - [`ladder`] - Ladder section decomposition used by the takeoffs

pub mod facade;
pub mod ladder;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use facade::{FacadeInput, FacadeResult};
pub use ladder::{LadderRun, LadderSection};
pub use summary::SummaryRecord;

/// Scaffold types with a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaffoldType {
    /// Access scaffold running along a building face
    Facade,
}

impl ScaffoldType {
    /// All supported types
    pub const ALL: [ScaffoldType; 1] = [ScaffoldType::Facade];

    /// Wire name used in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaffoldType::Facade => "facade",
        }
    }

    /// Parse a wire name.
    ///
    /// Matching is exact; anything else is an unsupported type.
    pub fn parse(value: &str) -> CalcResult<Self> {
        ScaffoldType::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| CalcError::unsupported_scaffold_type(value))
    }
}

/// Enum wrapper for all calculation types.
///
/// Lets a caller hold any validated takeoff request and run it without
/// knowing which scaffold it is for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Facade scaffold takeoff
    Facade(FacadeInput),
}

impl CalculationItem {
    /// Scaffold type this item computes
    pub fn scaffold_type(&self) -> ScaffoldType {
        match self {
            CalculationItem::Facade(_) => ScaffoldType::Facade,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Facade(_) => "Facade",
        }
    }

    /// Run the takeoff.
    pub fn compute(&self) -> FacadeResult {
        match self {
            CalculationItem::Facade(input) => facade::compute(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scaffold_type() {
        assert_eq!(ScaffoldType::parse("facade").unwrap(), ScaffoldType::Facade);
        assert_eq!(
            ScaffoldType::parse("Facade").unwrap_err(),
            CalcError::unsupported_scaffold_type("Facade")
        );
        assert!(ScaffoldType::parse("").is_err());
    }

    #[test]
    fn test_item_dispatch() {
        let item = CalculationItem::Facade(FacadeInput {
            length_ft: 7.0,
            width_ft: 5.0,
            height_ft: 6.5,
            working_levels: 1,
            include_ladder: false,
        });
        assert_eq!(item.scaffold_type(), ScaffoldType::Facade);
        assert_eq!(item.calc_type(), "Facade");
        assert_eq!(item.compute().grid.num_bays, 1);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "Facade");
    }
}
