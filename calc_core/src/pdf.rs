//! # PDF Generation Module
//!
//! Generates a printable material list from a takeoff using Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Data is injected via string replacement before compilation
//! - Fonts come from `typst-assets` and are parsed once per process; no
//!   system fonts are read
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::calculations::facade::{compute, FacadeInput};
//! use calc_core::pdf::render_takeoff_pdf;
//! use calc_core::report::ReportMeta;
//!
//! let result = compute(&FacadeInput {
//!     length_ft: 14.0,
//!     width_ft: 5.0,
//!     height_ft: 13.0,
//!     working_levels: 2,
//!     include_ladder: true,
//! });
//! let pdf_bytes = render_takeoff_pdf(&result, &ReportMeta::default()).unwrap();
//! std::fs::write("takeoff.pdf", pdf_bytes).unwrap();
//! ```

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Utc};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::FacadeResult;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{MaterialLine, MaterialTable};
use crate::report::ReportMeta;

// ============================================================================
// Typst World
// ============================================================================

/// Fonts bundled with `typst-assets`, parsed once per process.
struct FontStore {
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
}

impl FontStore {
    fn shared() -> &'static FontStore {
        static STORE: OnceLock<FontStore> = OnceLock::new();
        STORE.get_or_init(FontStore::bundled)
    }

    fn bundled() -> Self {
        let fonts: Vec<Font> = typst_assets::fonts()
            .flat_map(|data| Font::iter(Bytes::new(data)))
            .collect();
        tracing::debug!(fonts = fonts.len(), "loaded bundled report fonts");
        FontStore {
            book: LazyHash::new(FontBook::from_fonts(&fonts)),
            fonts,
        }
    }
}

/// Compilation context for one material list.
///
/// The document is the only source; there are no files to import. The
/// report date is fixed when the world is built so `datetime.today()`
/// agrees with the date printed in the header.
struct TakeoffWorld {
    document: Source,
    report_date: NaiveDate,
    fonts: &'static FontStore,
    library: LazyHash<Library>,
}

impl TakeoffWorld {
    fn new(markup: String, report_date: NaiveDate) -> Self {
        TakeoffWorld {
            document: Source::detached(markup),
            report_date,
            fonts: FontStore::shared(),
            library: LazyHash::new(Library::default()),
        }
    }

    fn not_found(id: FileId) -> FileError {
        FileError::NotFound(id.vpath().as_rootless_path().into())
    }
}

impl World for TakeoffWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.fonts.book
    }

    fn main(&self) -> FileId {
        self.document.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.document.id() {
            Ok(self.document.clone())
        } else {
            Err(Self::not_found(id))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(Self::not_found(id))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.fonts.get(index).cloned()
    }

    // The takeoff is dated, not timed, so the UTC offset does not apply.
    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let date = self.report_date;
        Datetime::from_ymd(date.year(), u8::try_from(date.month()).ok()?, u8::try_from(date.day()).ok()?)
    }
}

// ============================================================================
// PDF Template
// ============================================================================

/// Typst template for a takeoff material list.
///
/// Placeholders holding user-facing text are substituted with Typst string
/// literals, so labels like `--- LADDERS ---` or `~14.0ft` are not read as
/// markup shorthands.
const TAKEOFF_TEMPLATE: &str = r##"
#set page(
  paper: "us-letter",
  margin: (top: 0.75in, bottom: 0.75in, left: 0.75in, right: 0.75in),
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[Job: #{{JOB_ID}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[#{{DATE}}]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 11pt)

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Scaffold Material List]
    #v(4pt)
    #text(size: 14pt)[#{{SCAFFOLD_TYPE}}]
  ]
]

#v(12pt)

#table(
  columns: (auto, 1fr),
  stroke: none,
  row-gutter: 4pt,
  [Bay Configuration:], [#{{BAY_CONFIG}}],
  [Overall Dimensions:], [#{{OVERALL}}],
  [Prepared by:], [#{{PREPARED_BY}}],
  [Date:], [#{{DATE}}],
)

#v(8pt)

== Bay Grid

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  table.header([*Grid*], [*Count*]),
  [Bays], [{{BAYS}}],
  [Vertical runs], [{{RUNS}}],
  [Lifts], [{{LIFTS}}],
)

#v(8pt)

== Material List

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  table.header([*Item*], [*Qty*]),
{{MATERIAL_ROWS}}
)

#v(24pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

#text(size: 9pt, fill: gray)[
  Generated by Scaffold Takeoff \
  Quantities should be checked against the scaffold design before ordering.
]
"##;

// ============================================================================
// PDF Rendering
// ============================================================================

/// Render a takeoff to PDF.
///
/// # Arguments
///
/// * `result` - The computed takeoff
/// * `meta` - Optional job reference and author for the header
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError)` - If Typst compilation or PDF export fails
pub fn render_takeoff_pdf(result: &FacadeResult, meta: &ReportMeta) -> CalcResult<Vec<u8>> {
    let report_date = Utc::now().date_naive();
    let source = takeoff_source(result, meta, &report_date.format("%Y-%m-%d").to_string());

    let world = TakeoffWorld::new(source, report_date);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors
            .iter()
            .map(|e| e.message.to_string())
            .collect();
        CalcError::internal(format!("Typst compilation failed: {}", error_msgs.join("; ")))
    })?;

    // Render to PDF
    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::internal(format!("PDF rendering failed: {}", error_msgs.join("; ")))
    })?;

    tracing::debug!(bytes = pdf_bytes.len(), "rendered takeoff pdf");
    Ok(pdf_bytes)
}

/// Fill the template for `result`.
fn takeoff_source(result: &FacadeResult, meta: &ReportMeta, date: &str) -> String {
    let or_dash = |value: &Option<String>| typst_str(value.as_deref().unwrap_or("-"));

    TAKEOFF_TEMPLATE
        .replace("{{SCAFFOLD_TYPE}}", &typst_str(&result.summary.scaffold_type))
        .replace("{{BAY_CONFIG}}", &typst_str(&result.summary.bay_configuration))
        .replace("{{OVERALL}}", &typst_str(&result.summary.overall_dimensions))
        .replace("{{JOB_ID}}", &or_dash(&meta.job_id))
        .replace("{{PREPARED_BY}}", &or_dash(&meta.prepared_by))
        .replace("{{DATE}}", &typst_str(date))
        .replace("{{BAYS}}", &result.grid.num_bays.to_string())
        .replace("{{RUNS}}", &result.grid.num_vertical_runs.to_string())
        .replace("{{LIFTS}}", &result.grid.num_lifts.to_string())
        .replace("{{MATERIAL_ROWS}}", &material_rows(&result.materials))
}

/// Quote user text as a Typst string literal
fn typst_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Build material table rows; separators span both columns
fn material_rows(materials: &MaterialTable) -> String {
    materials
        .lines()
        .iter()
        .map(|line| match line {
            MaterialLine::Item { label, quantity } => {
                format!("  [#{}], [{}],", typst_str(label), quantity)
            }
            MaterialLine::Separator { label } => format!(
                "  table.cell(colspan: 2, fill: luma(235))[*#{}*],",
                typst_str(label)
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
