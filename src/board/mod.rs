//! Board content: songs, clues, categories and clue sets
//!
//! This module contains the data a round is played on. Content providers
//! build these values, [`clue_set::ClueSet::validate`] checks their shape,
//! and the game copies them onto its board.

pub mod category;
pub mod clue;
pub mod clue_set;
pub mod media;
