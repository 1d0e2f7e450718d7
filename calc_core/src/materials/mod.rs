//! # Material Table
//!
//! The bill of materials produced by a takeoff. Lines keep the order in
//! which the calculator emits them (base, standards, ledgers and transoms,
//! decking, then ladders) because that is the order they are shown in.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{labels, MaterialTable};
//!
//! let mut table = MaterialTable::new();
//! table.set(labels::STANDARDS, 6);
//! table.add(labels::STANDARDS, 3);
//! table.push_separator(labels::LADDER_SEPARATOR);
//! table.set(labels::ladder_section(5), 2);
//!
//! assert_eq!(table.quantity(labels::STANDARDS), Some(9));
//! assert_eq!(
//!     serde_json::to_string(&table).unwrap(),
//!     r#"{"Standards (Verticals)":9,"--- LADDERS ---":"","5 ft Ladder Section":2}"#
//! );
//! ```

pub mod labels;
pub mod table;

pub use table::{MaterialLine, MaterialTable};
