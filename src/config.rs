//! Round configuration
//!
//! A round is a grid of categories, each holding the same number of clues
//! whose point values rise by a fixed step. The defaults reproduce the
//! classic six by five board with clues worth 200 to 1000 points.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants::round;

/// The shape every clue set of a round must follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RoundConfig {
    /// Number of categories on the board
    #[garde(range(min = 1, max = round::MAX_CATEGORY_COUNT))]
    pub category_count: usize,
    /// Number of clues inside every category
    #[garde(range(min = 1, max = round::MAX_CLUE_COUNT_PER_CATEGORY))]
    pub clue_count_per_category: usize,
    /// Point value of the first clue, and the increment between clues
    #[garde(range(min = 1, max = round::MAX_POINT_VALUE_STEP))]
    pub point_value_step: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            category_count: round::CATEGORY_COUNT,
            clue_count_per_category: round::CLUE_COUNT_PER_CATEGORY,
            point_value_step: round::POINT_VALUE_STEP,
        }
    }
}

impl RoundConfig {
    /// Point value expected for the clue at `clue_index` (0-based)
    ///
    /// Saturates at `u32::MAX` for configs that were never validated.
    pub fn expected_point_value(&self, clue_index: usize) -> u32 {
        u32::try_from(clue_index)
            .unwrap_or(u32::MAX)
            .saturating_add(1)
            .saturating_mul(self.point_value_step)
    }

    /// Highest point value available on the board
    pub fn maximum_point_value(&self) -> u32 {
        self.expected_point_value(self.clue_count_per_category.saturating_sub(1))
    }
}
