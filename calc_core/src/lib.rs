//! # calc_core - Scaffold Quantity Takeoff Engine
//!
//! `calc_core` computes the bill of materials for a scaffold from a handful
//! of dimensions. All inputs and outputs are JSON-serializable, so the same
//! engine can sit behind a web endpoint, a CLI or another service.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types at the request boundary
//! - **Total Core**: The quantity math never fails; input limits live in
//!   `FacadeInput::validate` and the [`api`] boundary applies them
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::api::generate_json;
//!
//! let body = r#"{"scaffold_type": "facade", "length": 14, "width": 5,
//!                "height": 13, "working_levels": 2, "include_ladder": true}"#;
//! let response = generate_json(body).unwrap();
//!
//! // Serialize for the wire
//! let json = serde_json::to_string_pretty(&response).unwrap();
//! assert!(json.contains("--- LADDERS ---"));
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Request coercion, validation and response shape
//! - [`calculations`] - Takeoff calculations (facade scaffold, ladders)
//! - [`materials`] - Ordered material table and labels
//! - [`report`] - Plain-text report
//! - [`pdf`] - Printable PDF report
//! - [`units`] - Type-safe length wrapper
//! - [`errors`] - Structured error types

pub mod api;
pub mod calculations;
pub mod errors;
pub mod materials;
pub mod pdf;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use api::{generate, generate_json, GenerateRequest, GenerateResponse};
pub use calculations::{CalculationItem, FacadeInput, FacadeResult, ScaffoldType, SummaryRecord};
pub use errors::{CalcError, CalcResult};
pub use materials::{MaterialLine, MaterialTable};
pub use report::ReportMeta;
