//! Human-readable summary of a takeoff.

use serde::{Deserialize, Serialize};

/// Headline description of the scaffold a takeoff was computed for.
///
/// ## JSON Example
///
/// ```json
/// {
///   "Scaffold Type": "Facade Scaffold",
///   "Bay Configuration": "2 bay(s) @ 7.0ft x 5.0ft",
///   "Overall Dimensions": "~14.0ft L x 5.0ft W x 13.0ft H"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Scaffold type display name
    #[serde(rename = "Scaffold Type")]
    pub scaffold_type: String,

    /// Bay count and bay size
    #[serde(rename = "Bay Configuration")]
    pub bay_configuration: String,

    /// Approximate overall envelope
    #[serde(rename = "Overall Dimensions")]
    pub overall_dimensions: String,
}

impl SummaryRecord {
    /// Label/value pairs in display order
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Scaffold Type", &self.scaffold_type),
            ("Bay Configuration", &self.bay_configuration),
            ("Overall Dimensions", &self.overall_dimensions),
        ]
    }
}
