//! # MusicGuess Game Library
//!
//! This library provides the round engine for MusicGuess, a quiz-show
//! style music guessing game. Players pick point-valued clues from a board
//! of categories, respond, and accumulate scores. Every clue is a song
//! supplied by a music catalog.
//!
//! The engine is a synchronous state machine. Content arrives as a
//! [`board::clue_set::ClueSet`], is validated and copied into a
//! [`game::Game`], and a presentation layer drives the game directly or
//! through a [`session::Session`] that announces every change.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_field_names)]

pub mod board;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod game;
pub mod id;
pub mod leaderboard;
pub mod player;
pub mod session;
pub mod settings;

pub use game::Game;
pub use id::Id;
pub use player::Player;
