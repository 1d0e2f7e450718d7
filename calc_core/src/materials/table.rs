//! Ordered material table.
//!
//! Lines are tagged: a counted item or a display separator. On the wire the
//! table is a JSON object in insertion order, with separators carrying an
//! empty string instead of a number.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One line of the bill of materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialLine {
    /// A counted component. The quantity is signed so that ladder-opening
    /// deductions on degenerate grids stay visible instead of wrapping.
    Item { label: String, quantity: i64 },
    /// A heading with no quantity
    Separator { label: String },
}

impl MaterialLine {
    /// Display label of this line
    pub fn label(&self) -> &str {
        match self {
            MaterialLine::Item { label, .. } | MaterialLine::Separator { label } => label.as_str(),
        }
    }

    /// Quantity, or `None` for separators
    pub fn quantity(&self) -> Option<i64> {
        match self {
            MaterialLine::Item { quantity, .. } => Some(*quantity),
            MaterialLine::Separator { .. } => None,
        }
    }

    /// True for separator lines
    pub fn is_separator(&self) -> bool {
        matches!(self, MaterialLine::Separator { .. })
    }
}

/// Ordered bill of materials, keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialTable {
    lines: Vec<MaterialLine>,
}

impl MaterialTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.label() == label)
    }

    /// Set the quantity for `label`.
    ///
    /// An existing line is overwritten in place and keeps its position;
    /// a new label goes to the end.
    pub fn set(&mut self, label: impl Into<String>, quantity: i64) {
        let label = label.into();
        match self.position(&label) {
            Some(idx) => {
                self.lines[idx] = MaterialLine::Item { label, quantity };
            }
            None => self.lines.push(MaterialLine::Item { label, quantity }),
        }
    }

    /// Add `delta` (which may be negative) to the quantity for `label`.
    ///
    /// A missing label is created with `delta` as its quantity. A separator
    /// with the same label is replaced by an item.
    pub fn add(&mut self, label: impl Into<String>, delta: i64) {
        let label = label.into();
        match self.position(&label) {
            Some(idx) => {
                let current = self.lines[idx].quantity().unwrap_or(0);
                self.lines[idx] = MaterialLine::Item {
                    label,
                    quantity: current + delta,
                };
            }
            None => self.lines.push(MaterialLine::Item {
                label,
                quantity: delta,
            }),
        }
    }

    /// Append a separator line
    pub fn push_separator(&mut self, label: impl Into<String>) {
        self.lines.push(MaterialLine::Separator {
            label: label.into(),
        });
    }

    /// Quantity for `label`, `None` if absent or a separator
    pub fn quantity(&self, label: &str) -> Option<i64> {
        self.position(label).and_then(|idx| self.lines[idx].quantity())
    }

    /// True if a line with this label exists
    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    /// All lines in display order
    pub fn lines(&self) -> &[MaterialLine] {
        &self.lines
    }

    /// All labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(MaterialLine::label)
    }

    /// True if the table holds at least one separator
    pub fn has_separator(&self) -> bool {
        self.lines.iter().any(MaterialLine::is_separator)
    }

    /// Items whose quantity went below zero
    pub fn negative_lines(&self) -> Vec<&MaterialLine> {
        self.lines
            .iter()
            .filter(|line| line.quantity().is_some_and(|q| q < 0))
            .collect()
    }

    /// Number of lines, separators included
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the table has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Serialize for MaterialTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lines.len()))?;
        for line in &self.lines {
            match line {
                MaterialLine::Item { label, quantity } => map.serialize_entry(label, quantity)?,
                MaterialLine::Separator { label } => map.serialize_entry(label, "")?,
            }
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireQuantity {
    Count(i64),
    Blank(String),
}

struct MaterialTableVisitor;

impl<'de> Visitor<'de> for MaterialTableVisitor {
    type Value = MaterialTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of material labels to integer quantities or \"\"")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = MaterialTable::new();
        while let Some((label, value)) = access.next_entry::<String, WireQuantity>()? {
            match value {
                WireQuantity::Count(quantity) => table.lines.push(MaterialLine::Item { label, quantity }),
                WireQuantity::Blank(s) if s.is_empty() => table.lines.push(MaterialLine::Separator { label }),
                WireQuantity::Blank(s) => {
                    return Err(de::Error::custom(format!(
                        "material '{}' has non-numeric quantity '{}'",
                        label, s
                    )))
                }
            }
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for MaterialTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MaterialTableVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut table = MaterialTable::new();
        table.set("A", 1);
        table.set("B", 2);
        table.set("A", 10);
        assert_eq!(table.labels().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(table.quantity("A"), Some(10));
    }

    #[test]
    fn test_add_accumulates_and_creates() {
        let mut table = MaterialTable::new();
        table.add("Ledgers", 12);
        table.add("Ledgers", 8);
        table.add("Ledgers", -2);
        table.add("Braces", 4);
        assert_eq!(table.quantity("Ledgers"), Some(18));
        assert_eq!(table.quantity("Braces"), Some(4));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_separator_has_no_quantity() {
        let mut table = MaterialTable::new();
        table.push_separator("---");
        assert!(table.contains("---"));
        assert!(table.has_separator());
        assert_eq!(table.quantity("---"), None);
    }

    #[test]
    fn test_negative_lines() {
        let mut table = MaterialTable::new();
        table.set("Toe Boards", 0);
        table.add("Toe Boards", -2);
        table.set("Planks", 5);
        let negatives = table.negative_lines();
        assert_eq!(negatives.len(), 1);
        assert_eq!(negatives[0].label(), "Toe Boards");
    }

    #[test]
    fn test_wire_format_preserves_order() {
        let mut table = MaterialTable::new();
        table.set("Zeta", 1);
        table.set("Alpha", 2);
        table.push_separator("--- LADDERS ---");
        table.set("5 ft Ladder Section", 2);

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"Zeta":1,"Alpha":2,"--- LADDERS ---":"","5 ft Ladder Section":2}"#
        );

        let parsed: MaterialTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_wire_rejects_text_quantity() {
        let result = serde_json::from_str::<MaterialTable>(r#"{"Planks":"lots"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_tagged_line_form() {
        let line = MaterialLine::Separator {
            label: "--- LADDERS ---".to_string(),
        };
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["kind"], "separator");
        assert_eq!(value["label"], "--- LADDERS ---");
    }
}
