//! Configuration constants for the MusicGuess game engine
//!
//! This module contains the default round shape and the limits used
//! throughout the engine to keep clue sets, players and settings within
//! consistent boundaries.

/// Round shape constants
pub mod round {
    /// Default number of categories on the board
    pub const CATEGORY_COUNT: usize = 6;
    /// Default number of clues in each category
    pub const CLUE_COUNT_PER_CATEGORY: usize = 5;
    /// Point value difference between consecutive clues of a category
    pub const POINT_VALUE_STEP: u32 = 200;
    /// Largest board a round config may describe (categories)
    pub const MAX_CATEGORY_COUNT: usize = 12;
    /// Largest board a round config may describe (clues per category)
    pub const MAX_CLUE_COUNT_PER_CATEGORY: usize = 10;
    /// Largest point value step a round config may use
    pub const MAX_POINT_VALUE_STEP: u32 = 100_000;
}

/// Player configuration constants
pub mod player {
    /// Maximum number of players in a single game
    pub const MAX_PLAYER_COUNT: usize = 32;
}

/// Settings configuration constants
pub mod settings {
    /// Maximum number of remembered player names
    pub const MAX_RECENT_PLAYERS: usize = 16;
}
