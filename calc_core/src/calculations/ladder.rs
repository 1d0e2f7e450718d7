//! # Ladder Sections
//!
//! Splits the climb between working levels into stock ladder sections.
//!
//! The fit is greedy: take as many of the longest section as fit, then the
//! next, and so on. A leftover gap still gets one 3 ft section, so a run may
//! be slightly taller than the climb but never shorter.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::ladder::decompose_climb;
//!
//! let run = decompose_climb(12.0);
//! assert_eq!(run.count(5), 2);
//! assert_eq!(run.count(4), 0);
//! assert_eq!(run.count(3), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Stock section lengths in feet, longest first
pub const LADDER_SECTION_SIZES_FT: [u32; 3] = [5, 4, 3];

/// Section used to close any gap the greedy fit leaves
pub const FILLER_SECTION_FT: u32 = 3;

/// Count of one section size within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderSection {
    /// Section length in feet
    pub size_ft: u32,
    /// Number of sections of this size
    pub count: i64,
}

/// Ladder sections for one or more runs.
///
/// Sizes appear in the order they were first used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderRun {
    pub sections: Vec<LadderSection>,
}

impl LadderRun {
    fn add(&mut self, size_ft: u32, count: i64) {
        match self.sections.iter_mut().find(|s| s.size_ft == size_ft) {
            Some(section) => section.count += count,
            None => self.sections.push(LadderSection { size_ft, count }),
        }
    }

    /// Number of sections of `size_ft` (zero if unused)
    pub fn count(&self, size_ft: u32) -> i64 {
        self.sections
            .iter()
            .find(|s| s.size_ft == size_ft)
            .map_or(0, |s| s.count)
    }

    /// Combined length of all sections in feet
    pub fn total_length_ft(&self) -> i64 {
        self.sections
            .iter()
            .map(|s| i64::from(s.size_ft) * s.count)
            .sum()
    }

    /// True if no sections are used
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Same run repeated `runs` times
    pub fn scaled(mut self, runs: u32) -> Self {
        for section in &mut self.sections {
            section.count *= i64::from(runs);
        }
        self
    }
}

/// Decompose a single climb into ladder sections.
///
/// Non-positive climbs need no ladder and give an empty run.
pub fn decompose_climb(climb_ft: f64) -> LadderRun {
    let mut run = LadderRun::default();
    let mut remaining = climb_ft;

    for size_ft in LADDER_SECTION_SIZES_FT {
        let size = f64::from(size_ft);
        let count = (remaining / size).floor();
        if count > 0.0 {
            run.add(size_ft, count as i64);
            remaining -= count * size;
        }
    }

    if remaining > 0.0 {
        run.add(FILLER_SECTION_FT, 1);
    }

    run
}

/// Ladder sections for a scaffold of `height_ft` with `working_levels` decks.
///
/// Levels are assumed evenly spaced, so every run climbs
/// `height_ft / working_levels`. One run serves each working level.
/// Returns `None` for zero working levels, where there is nothing to reach.
pub fn ladder_sections_for(height_ft: f64, working_levels: u32) -> Option<LadderRun> {
    if working_levels == 0 {
        return None;
    }
    let climb_ft = height_ft / f64::from(working_levels);
    Some(decompose_climb(climb_ft).scaled(working_levels))
}
