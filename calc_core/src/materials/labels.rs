//! Display labels for material lines.
//!
//! Member labels embed the member length, so they are built from the bay
//! dimensions rather than fixed (`7.0 ft Ledgers`, `5.0 ft Toe Boards`).

use crate::units::format_feet;

/// Starter base jacks and collars, one of each per vertical run
pub const BASE_JACKS: &str = "Base Jacks / Collars (Starter)";

/// Vertical standards
pub const STANDARDS: &str = "Standards (Verticals)";

/// Steel deck planks
pub const STEEL_PLANKS: &str = "Steel Planks";

/// Diagonal bay braces
pub const BAY_BRACES: &str = "Bay Braces";

/// Separator shown ahead of the ladder sections
pub const LADDER_SEPARATOR: &str = "--- LADDERS ---";

/// Length-direction ledgers for a bay of `bay_length_ft`
pub fn ledgers(bay_length_ft: f64) -> String {
    format!("{} ft Ledgers", format_feet(bay_length_ft))
}

/// Width-direction ledgers (transoms) for a bay of `bay_width_ft`
pub fn transoms(bay_width_ft: f64) -> String {
    format!("{} ft Ledgers (Transoms)", format_feet(bay_width_ft))
}

/// Toe boards cut to a member length
pub fn toe_boards(member_ft: f64) -> String {
    format!("{} ft Toe Boards", format_feet(member_ft))
}

/// Short ledgers framing a ladder opening
pub fn opening_ledgers(opening_ft: u32) -> String {
    format!("{} ft Ledgers (for ladder access)", opening_ft)
}

/// Short toe boards closing a ladder opening
pub fn opening_toe_boards(opening_ft: u32) -> String {
    format!("{} ft Toe Boards (for ladder access)", opening_ft)
}

/// Ladder section of a given length
pub fn ladder_section(size_ft: u32) -> String {
    format!("{} ft Ladder Section", size_ft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_labels_keep_decimal() {
        assert_eq!(ledgers(7.0), "7.0 ft Ledgers");
        assert_eq!(transoms(5.0), "5.0 ft Ledgers (Transoms)");
        assert_eq!(toe_boards(7.0), "7.0 ft Toe Boards");
    }

    #[test]
    fn test_ladder_labels_are_whole_feet() {
        assert_eq!(opening_ledgers(4), "4 ft Ledgers (for ladder access)");
        assert_eq!(opening_toe_boards(4), "4 ft Toe Boards (for ladder access)");
        assert_eq!(ladder_section(3), "3 ft Ladder Section");
    }
}
