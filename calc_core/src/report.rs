//! # Plain-Text Report
//!
//! Renders a takeoff as a plain-text block for pasting into email or chat,
//! or for printing from a terminal.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::facade::{compute, FacadeInput};
//! use calc_core::report::{render_text, ReportMeta};
//!
//! let result = compute(&FacadeInput {
//!     length_ft: 14.0,
//!     width_ft: 5.0,
//!     height_ft: 13.0,
//!     working_levels: 2,
//!     include_ladder: false,
//! });
//! let text = render_text(&result.summary, &result.materials, &ReportMeta::default());
//! assert!(text.starts_with("Facade Scaffold"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::SummaryRecord;
use crate::materials::{MaterialLine, MaterialTable};

/// Optional header details for reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Person or company the list was prepared by
    pub prepared_by: Option<String>,
    /// Job or site reference
    pub job_id: Option<String>,
}

impl ReportMeta {
    pub fn new(prepared_by: Option<String>, job_id: Option<String>) -> Self {
        ReportMeta { prepared_by, job_id }
    }
}

/// Render summary and materials as aligned plain text.
pub fn render_text(summary: &SummaryRecord, materials: &MaterialTable, meta: &ReportMeta) -> String {
    let mut out = String::new();

    out.push_str(&summary.scaffold_type);
    out.push('\n');
    for (label, value) in summary.fields().into_iter().skip(1) {
        out.push_str(&format!("- {}: {}\n", label, value));
    }
    if let Some(job_id) = &meta.job_id {
        out.push_str(&format!("- Job: {}\n", job_id));
    }
    if let Some(prepared_by) = &meta.prepared_by {
        out.push_str(&format!("- Prepared by: {}\n", prepared_by));
    }

    out.push_str("\nMaterial List:\n");
    let width = materials.labels().map(str::len).max().unwrap_or(0);
    for line in materials.lines() {
        match line {
            MaterialLine::Item { label, quantity } => {
                out.push_str(&format!("{:<width$}  {:>5}\n", label, quantity, width = width));
            }
            MaterialLine::Separator { label } => {
                out.push('\n');
                out.push_str(label);
                out.push('\n');
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::facade::{compute, FacadeInput};

    fn takeoff(include_ladder: bool) -> crate::calculations::FacadeResult {
        compute(&FacadeInput {
            length_ft: 14.0,
            width_ft: 5.0,
            height_ft: 13.0,
            working_levels: 2,
            include_ladder,
        })
    }

    #[test]
    fn test_text_header() {
        let result = takeoff(false);
        let text = render_text(&result.summary, &result.materials, &ReportMeta::default());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Facade Scaffold"));
        assert_eq!(lines.next(), Some("- Bay Configuration: 2 bay(s) @ 7.0ft x 5.0ft"));
        assert_eq!(
            lines.next(),
            Some("- Overall Dimensions: ~14.0ft L x 5.0ft W x 13.0ft H")
        );
        assert!(!text.contains("Prepared by"));
    }

    #[test]
    fn test_text_rows_and_separator() {
        let result = takeoff(true);
        let text = render_text(&result.summary, &result.materials, &ReportMeta::default());
        assert!(text.contains("\n--- LADDERS ---\n"));

        let ledger_row = text
            .lines()
            .find(|l| l.starts_with("7.0 ft Ledgers"))
            .unwrap();
        assert!(ledger_row.trim_end().ends_with("18"));
    }

    #[test]
    fn test_text_meta() {
        let result = takeoff(false);
        let meta = ReportMeta::new(Some("Site Office".to_string()), Some("J-104".to_string()));
        let text = render_text(&result.summary, &result.materials, &meta);
        assert!(text.contains("- Job: J-104\n"));
        assert!(text.contains("- Prepared by: Site Office\n"));
    }
}
