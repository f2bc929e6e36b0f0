//! Core game logic and state management
//!
//! This module contains the [`Game`] struct, the state machine for one
//! round. It owns a copy of the board and the players, and exposes the
//! only operations that change either: selecting a clue, responding to
//! it, marking it as done and correcting a score.
//!
//! Mutations whose preconditions do not hold are ignored rather than
//! reported as errors. The presentation layer is expected to offer only
//! legal actions, so an illegal one leaves the game untouched. Every
//! mutation returns `true` when it changed the game.

use std::fmt::Debug;

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    board::{
        category::Category,
        clue::Clue,
        clue_set::{ClueSet, ValidationError},
    },
    config::RoundConfig,
    constants,
    id::Id,
    leaderboard,
    player::Player,
};

/// Errors that prevent a game from being constructed
#[derive(Error, Debug)]
pub enum Error {
    /// The clue set does not fit the round shape
    #[error("invalid clue set: {0}")]
    Validation(#[from] ValidationError),
    /// The round configuration itself is out of bounds
    #[error("invalid round configuration: {0}")]
    Config(#[from] garde::Report),
    /// A game needs at least one player
    #[error("a game needs at least one player")]
    NoPlayers,
    /// More players than a single game allows
    #[error("too many players: {0}")]
    TooManyPlayers(usize),
    /// The same player was listed twice
    #[error("player {0} was listed more than once")]
    DuplicatePlayer(Id),
    /// A restored game does not have exactly one player picking clues
    #[error("expected exactly one selecting player, found {0}")]
    SelectingPlayerCount(usize),
    /// A restored game selects a clue that cannot be played
    #[error("the selected clue is not an open clue on the board")]
    InvalidSelection,
}

/// Position of a clue on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct BoardPosition {
    category: usize,
    clue: usize,
}

/// The state of one round
///
/// Deserializing a game checks the same player rules as construction, that
/// exactly one player may select, and that any selected clue is on the
/// board and not done.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "GameState")]
pub struct Game {
    /// The board, copied from the clue set the game was built from
    categories: Vec<Category>,
    /// The contestants, in the order they were given
    players: Vec<Player>,
    /// The clue currently being played
    selected: Option<BoardPosition>,
}

/// Serialized form of a [`Game`], checked before it becomes one
#[derive(Deserialize)]
struct GameState {
    categories: Vec<Category>,
    players: Vec<Player>,
    selected: Option<BoardPosition>,
}

impl TryFrom<GameState> for Game {
    type Error = Error;

    fn try_from(state: GameState) -> Result<Self, Self::Error> {
        check_players(&state.players)?;
        let selecting = state
            .players
            .iter()
            .filter(|player| player.can_select_clue())
            .count();
        if selecting != 1 {
            return Err(Error::SelectingPlayerCount(selecting));
        }

        let game = Self {
            categories: state.categories,
            players: state.players,
            selected: state.selected,
        };
        if game.selected.is_some() && !game.selected_clue().is_some_and(|clue| !clue.is_done()) {
            return Err(Error::InvalidSelection);
        }
        Ok(game)
    }
}

fn check_players(players: &[Player]) -> Result<(), Error> {
    if players.is_empty() {
        return Err(Error::NoPlayers);
    }
    if players.len() > constants::player::MAX_PLAYER_COUNT {
        return Err(Error::TooManyPlayers(players.len()));
    }
    if let Some(duplicate) = players.iter().map(Player::id).duplicates().next() {
        return Err(Error::DuplicatePlayer(duplicate));
    }
    Ok(())
}

impl Debug for Game {
    /// Custom debug implementation that avoids printing the whole board
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("selected", &self.selected_clue().map(Clue::title))
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a new game with the default round shape
    ///
    /// The clue set is validated first, and the player allowed to select
    /// the first clue is drawn uniformly at random.
    ///
    /// # Errors
    ///
    /// * `Error::Validation` - The clue set does not fit the default shape
    /// * `Error::NoPlayers` - `players` is empty
    /// * `Error::TooManyPlayers` - `players` exceeds the player limit
    /// * `Error::DuplicatePlayer` - The same player appears twice
    ///
    /// # Examples
    ///
    /// ```rust
    /// use musicguess::board::{category::Category, clue_set::ClueSet, media::Song};
    /// use musicguess::config::RoundConfig;
    /// use musicguess::game::Game;
    /// use musicguess::player::Player;
    ///
    /// let config = RoundConfig::default();
    /// let categories = (0..config.category_count)
    ///     .map(|c| {
    ///         let songs = (0..config.clue_count_per_category)
    ///             .map(|s| Song::new(format!("{c}.{s}"), format!("Song {s}"), format!("Artist {c}")));
    ///         Category::from_songs(format!("Artist {c}"), songs, &config)
    ///     })
    ///     .collect();
    ///
    /// let game = Game::new(
    ///     ClueSet::new(categories),
    ///     vec![Player::new("Alice"), Player::new("Bob")],
    /// )
    /// .unwrap();
    ///
    /// assert!(game.selecting_player().is_some());
    /// ```
    pub fn new(clue_set: ClueSet, players: Vec<Player>) -> Result<Self, Error> {
        Self::with_config(
            clue_set,
            players,
            &RoundConfig::default(),
            &mut fastrand::Rng::new(),
        )
    }

    /// Creates a new game with an explicit round shape and random source
    ///
    /// # Errors
    ///
    /// * `Error::Config` - `config` is out of bounds
    /// * `Error::Validation` - The clue set does not fit `config`
    /// * `Error::NoPlayers` - `players` is empty
    /// * `Error::TooManyPlayers` - `players` exceeds the player limit
    /// * `Error::DuplicatePlayer` - The same player appears twice
    pub fn with_config(
        clue_set: ClueSet,
        mut players: Vec<Player>,
        config: &RoundConfig,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, Error> {
        config.validate()?;
        clue_set.validate_with(config)?;
        check_players(&players)?;

        let starting_index = rng.usize(..players.len());
        for (index, player) in players.iter_mut().enumerate() {
            player.set_can_select_clue(index == starting_index);
            player.set_can_respond_to_current_clue(false);
        }

        info!(
            categories = clue_set.categories.len(),
            players = players.len(),
            starting_player = %players[starting_index].name(),
            "game created"
        );

        Ok(Self {
            categories: clue_set.categories,
            players,
            selected: None,
        })
    }

    /// Returns the board in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the players in the order they were given
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Looks up a player of this game
    pub fn player(&self, player_id: Id) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == player_id)
    }

    /// Returns the clue currently being played, if any
    pub fn selected_clue(&self) -> Option<&Clue> {
        let position = self.selected?;
        self.categories
            .get(position.category)?
            .clues()
            .get(position.clue)
    }

    /// Returns the player who picks the next clue
    pub fn selecting_player(&self) -> Option<&Player> {
        self.players.iter().find(|player| player.can_select_clue())
    }

    /// Returns every player tied for the highest positive score
    pub fn current_leaders(&self) -> Vec<&Player> {
        leaderboard::current_leaders(&self.players)
    }

    /// Returns the players sorted by descending score
    pub fn standings(&self) -> Vec<&Player> {
        leaderboard::standings(&self.players)
    }

    /// Whether every category on the board is done
    ///
    /// The game itself does not stop once this is true; ending the round is
    /// up to the caller.
    pub fn is_round_complete(&self) -> bool {
        self.categories.iter().all(Category::is_done)
    }

    fn find_clue(&self, clue_id: Id) -> Option<BoardPosition> {
        self.categories
            .iter()
            .enumerate()
            .find_map(|(category_index, category)| {
                category
                    .clues()
                    .iter()
                    .position(|clue| clue.id() == clue_id)
                    .map(|clue_index| BoardPosition {
                        category: category_index,
                        clue: clue_index,
                    })
            })
    }

    fn player_index(&self, player_id: Id) -> Option<usize> {
        self.players
            .iter()
            .position(|player| player.id() == player_id)
    }

    /// Selects a clue from the board
    ///
    /// Any previous selection is replaced, and every player becomes able to
    /// respond. Who may select next is left unchanged.
    ///
    /// Does nothing if the clue is not on this board or is already done.
    pub fn select_clue(&mut self, clue_id: Id) -> bool {
        let Some(position) = self.find_clue(clue_id) else {
            debug!(%clue_id, "ignoring selection of a clue that is not on the board");
            return false;
        };
        if self.categories[position.category].clues()[position.clue].is_done() {
            debug!(%clue_id, "ignoring selection of a clue that is already done");
            return false;
        }

        self.selected = Some(position);
        for player in &mut self.players {
            player.set_can_respond_to_current_clue(true);
        }
        true
    }

    /// Records a player's response to the selected clue
    ///
    /// The clue's point value is added to the player's score for a correct
    /// response and subtracted for an incorrect one, and the player cannot
    /// respond again. A correct response also closes the clue to everyone
    /// and hands the next selection to the responder. After an incorrect
    /// response the others may still respond.
    ///
    /// The selected clue stays selected until
    /// [`mark_selected_clue_as_done`](Self::mark_selected_clue_as_done).
    ///
    /// Does nothing if no clue is selected, the player is not in this game,
    /// or the player may not respond.
    pub fn respond_to_selected_clue(&mut self, player_id: Id, correct: bool) -> bool {
        let Some(point_value) = self.selected_clue().map(Clue::point_value) else {
            debug!(%player_id, "ignoring response while no clue is selected");
            return false;
        };
        let Some(player_index) = self.player_index(player_id) else {
            debug!(%player_id, "ignoring response from a player not in this game");
            return false;
        };
        if !self.players[player_index].can_respond_to_current_clue() {
            debug!(%player_id, "ignoring response from a player who may not respond");
            return false;
        }

        let amount = i64::from(point_value);
        let player = &mut self.players[player_index];
        player.add_to_score(if correct { amount } else { -amount });
        player.set_can_respond_to_current_clue(false);

        if correct {
            for (index, player) in self.players.iter_mut().enumerate() {
                player.set_can_select_clue(index == player_index);
                player.set_can_respond_to_current_clue(false);
            }
        }
        true
    }

    /// Marks the selected clue as done and clears the selection
    ///
    /// Does nothing if no clue is selected.
    pub fn mark_selected_clue_as_done(&mut self) -> bool {
        let Some(position) = self.selected.take() else {
            debug!("ignoring mark as done while no clue is selected");
            return false;
        };

        if let Some(clue) = self
            .categories
            .get_mut(position.category)
            .and_then(|category| category.clue_at_mut(position.clue))
        {
            if !clue.is_done() {
                clue.mark_done();
            }
        }
        true
    }

    /// Overwrites a player's score
    ///
    /// Used to correct scores by hand. Does nothing if the player is not in
    /// this game.
    pub fn set_score(&mut self, new_score: i64, player_id: Id) -> bool {
        let Some(player_index) = self.player_index(player_id) else {
            debug!(%player_id, "ignoring score change for a player not in this game");
            return false;
        };
        self.players[player_index].set_score(new_score);
        true
    }
}
