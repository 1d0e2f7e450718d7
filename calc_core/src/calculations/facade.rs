//! # Facade Scaffold Takeoff
//!
//! Computes the bill of materials for a facade scaffold from its envelope
//! and the number of working (decked) levels.
//!
//! ## Assumptions
//!
//! - Fixed 7.0 ft x 5.0 ft bays and 6.5 ft lifts (rosette spacing)
//! - 1.0 ft nominal plank coverage across the bay width
//! - Working levels are evenly spaced over the full height when sizing
//!   ladders
//! - A ladder opening replaces one top rail and one long toe board per
//!   working level with a 4 ft opening frame
//!
//! The calculation is total: degenerate dimensions give degenerate counts
//! rather than errors. [`FacadeInput::validate`] holds the limits that keep
//! every count inside `i64`, and the request boundary ([`crate::api`])
//! applies it before computing.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::facade::{compute, FacadeInput};
//!
//! let input = FacadeInput {
//!     length_ft: 14.0,
//!     width_ft: 5.0,
//!     height_ft: 13.0,
//!     working_levels: 2,
//!     include_ladder: false,
//! };
//!
//! let result = compute(&input);
//! assert_eq!(result.grid.num_bays, 2);
//! assert_eq!(result.materials.quantity("Steel Planks"), Some(20));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::ladder::{ladder_sections_for, LadderRun};
use crate::calculations::summary::SummaryRecord;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{labels, MaterialTable};
use crate::units::{format_feet, Feet};

/// Bay length along the facade (ft)
pub const BAY_LENGTH_FT: f64 = 7.0;

/// Bay depth away from the facade (ft)
pub const BAY_WIDTH_FT: f64 = 5.0;

/// Vertical spacing between rosette levels (ft)
pub const LIFT_HEIGHT_FT: f64 = 6.5;

/// Nominal coverage of one steel plank (ft)
pub const PLANK_WIDTH_FT: f64 = 1.0;

/// Width of the ladder opening frame (ft)
pub const LADDER_OPENING_FT: u32 = 4;

/// Display name used in the summary
pub const SCAFFOLD_NAME: &str = "Facade Scaffold";

/// Largest accepted length, width or height (ft)
pub const MAX_DIMENSION_FT: f64 = 100_000.0;

/// Largest accepted number of working levels
pub const MAX_WORKING_LEVELS: u32 = 10_000;

/// Input parameters for a facade scaffold takeoff.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_ft": 14.0,
///   "width_ft": 5.0,
///   "height_ft": 13.0,
///   "working_levels": 2,
///   "include_ladder": true
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacadeInput {
    /// Facade length to cover (ft)
    pub length_ft: f64,

    /// Deck width (ft), drives the plank count
    pub width_ft: f64,

    /// Total scaffold height (ft)
    pub height_ft: f64,

    /// Number of decked levels with guardrails and toe boards
    pub working_levels: u32,

    /// Convert one bay per working level into a ladder opening
    pub include_ladder: bool,
}

impl FacadeInput {
    /// Validate input parameters.
    ///
    /// Errors name the request field (`length`, `width`, `height`,
    /// `working_levels`) so clients can point at what they sent.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, feet) in [
            ("length", self.length_ft),
            ("width", self.width_ft),
            ("height", self.height_ft),
        ] {
            if !feet.is_finite() {
                return Err(CalcError::invalid_input(field, feet.to_string(), "Dimension must be finite"));
            }
            if feet <= 0.0 {
                return Err(CalcError::invalid_input(field, feet.to_string(), "Dimension must be positive"));
            }
            if feet > MAX_DIMENSION_FT {
                return Err(CalcError::invalid_input(
                    field,
                    feet.to_string(),
                    format!("Dimension exceeds {} ft", format_feet(MAX_DIMENSION_FT)),
                ));
            }
        }
        if self.working_levels > MAX_WORKING_LEVELS {
            return Err(CalcError::invalid_input(
                "working_levels",
                self.working_levels.to_string(),
                format!("Level count exceeds {}", MAX_WORKING_LEVELS),
            ));
        }
        Ok(())
    }
}

/// Bay grid derived from the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BayGrid {
    /// Bays along the length
    pub num_bays: i64,

    /// Vertical standard lines (one more than bays)
    pub num_vertical_runs: i64,

    /// Stacked lifts needed to reach the height
    pub num_lifts: i64,
}

impl BayGrid {
    /// Size the grid for a facade of `length` and `height`.
    pub fn for_envelope(length: Feet, height: Feet) -> Self {
        let num_bays = length.count_to_cover(Feet(BAY_LENGTH_FT));
        BayGrid {
            num_bays,
            num_vertical_runs: num_bays + 1,
            num_lifts: height.count_to_cover(Feet(LIFT_HEIGHT_FT)),
        }
    }

    /// Lift boundaries, base and top included
    pub fn lift_boundaries(&self) -> i64 {
        self.num_lifts + 1
    }

    /// Length actually covered by the bays (ft)
    pub fn covered_length_ft(&self) -> f64 {
        self.num_bays as f64 * BAY_LENGTH_FT
    }
}

/// Results from a facade takeoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacadeResult {
    /// Bay grid the quantities were derived from
    pub grid: BayGrid,

    /// Ladder sections, when a ladder was requested and has levels to reach
    pub ladders: Option<LadderRun>,

    /// Human-readable summary
    pub summary: SummaryRecord,

    /// Ordered bill of materials
    pub materials: MaterialTable,
}

/// Compute the bill of materials for a facade scaffold.
///
/// # Arguments
///
/// * `input` - Envelope, working levels and ladder flag
///
/// # Returns
///
/// The bay grid, summary and material table. Never fails, but counts are
/// only guaranteed to fit `i64` for input that passes
/// [`FacadeInput::validate`].
pub fn compute(input: &FacadeInput) -> FacadeResult {
    let grid = BayGrid::for_envelope(Feet(input.length_ft), Feet(input.height_ft));
    let bays = grid.num_bays;
    let runs = grid.num_vertical_runs;
    let levels = i64::from(input.working_levels);

    debug!(
        bays,
        runs,
        lifts = grid.num_lifts,
        levels,
        "sized facade grid"
    );

    let ledgers = labels::ledgers(BAY_LENGTH_FT);
    let transoms = labels::transoms(BAY_WIDTH_FT);
    let long_toe_boards = labels::toe_boards(BAY_LENGTH_FT);
    let end_toe_boards = labels::toe_boards(BAY_WIDTH_FT);

    let mut materials = MaterialTable::new();

    // One jack and one collar per vertical run
    materials.set(labels::BASE_JACKS, runs * 2);
    materials.set(labels::STANDARDS, runs * grid.num_lifts);

    // Front and back ledgers per bay, transom per run, at every lift boundary
    materials.set(&ledgers, bays * grid.lift_boundaries() * 2);
    materials.set(&transoms, runs * grid.lift_boundaries());

    // Mid and top rails on working levels, end rails on the two end runs
    materials.add(&ledgers, bays * levels * 2);
    materials.add(&transoms, 2 * levels * 2);

    let planks_across = Feet(input.width_ft).count_to_cover(Feet(PLANK_WIDTH_FT));
    materials.set(labels::STEEL_PLANKS, planks_across * bays * levels);
    materials.set(labels::BAY_BRACES, bays * 4 * levels);
    materials.set(&long_toe_boards, bays * levels);
    materials.set(&end_toe_boards, 2 * levels);

    let mut ladders = None;
    if input.include_ladder {
        // The opening bay loses its top rail and long toe board
        materials.add(&ledgers, -levels);
        materials.add(&long_toe_boards, -levels);
        materials.set(labels::opening_ledgers(LADDER_OPENING_FT), 2 * levels);
        materials.set(labels::opening_toe_boards(LADDER_OPENING_FT), levels);

        ladders = ladder_sections_for(input.height_ft, input.working_levels);
        if ladders.is_none() {
            warn!("ladder requested with no working levels, skipping ladder sections");
        }
    }

    if let Some(run) = ladders.as_ref().filter(|run| !run.is_empty()) {
        materials.push_separator(labels::LADDER_SEPARATOR);
        for section in &run.sections {
            materials.set(labels::ladder_section(section.size_ft), section.count);
        }
    }

    for line in materials.negative_lines() {
        warn!(
            material = line.label(),
            quantity = line.quantity(),
            "negative material quantity, check the scaffold dimensions"
        );
    }

    let summary = SummaryRecord {
        scaffold_type: SCAFFOLD_NAME.to_string(),
        bay_configuration: format!(
            "{} bay(s) @ {}ft x {}ft",
            bays,
            format_feet(BAY_LENGTH_FT),
            format_feet(BAY_WIDTH_FT)
        ),
        overall_dimensions: format!(
            "~{}ft L x {}ft W x {}ft H",
            format_feet(grid.covered_length_ft()),
            format_feet(input.width_ft),
            format_feet(input.height_ft)
        ),
    };

    FacadeResult {
        grid,
        ladders,
        summary,
        materials,
    }
}
