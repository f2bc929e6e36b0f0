//! Change notification for presentation layers
//!
//! A [`Session`] owns a [`Game`] together with every [`Tunnel`] that wants
//! to hear about it. Mutations go through the session, which forwards them
//! to the game and announces those that applied. Ignored actions are not
//! announced.

use derive_where::derive_where;
use itertools::Itertools;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::{
    board::{category::Category, clue::Clue},
    game::Game,
    id::Id,
    player::Player,
};

/// Messages describing a single change to the game
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum UpdateMessage {
    /// A clue was selected and is open for responses
    ClueSelected {
        /// The selected clue
        clue_id: Id,
        /// Display title of the clue
        title: String,
        /// Points at stake
        point_value: u32,
    },
    /// A player responded to the selected clue
    Responded {
        /// The responding player
        player_id: Id,
        /// Whether the response was correct
        correct: bool,
        /// The player's score after the response
        score: i64,
        /// The player who picks the next clue
        selecting_player: Option<Id>,
    },
    /// The selected clue was marked as done
    ClueDone {
        /// The finished clue
        clue_id: Id,
        /// Whether every category is now done
        round_complete: bool,
    },
    /// A score was corrected by hand
    ScoreSet {
        /// The player whose score changed
        player_id: Id,
        /// The new score
        score: i64,
    },
}

/// Messages carrying the complete game state
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub enum SyncMessage {
    /// The full board with players and leaders
    Board {
        /// The board in display order
        categories: Vec<Category>,
        /// The players in game order
        players: Vec<Player>,
        /// The clue currently being played
        selected_clue: Option<Id>,
        /// Players tied for the highest positive score
        leaders: Vec<Id>,
    },
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

impl SyncMessage {
    /// Converts the sync message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Trait for delivering game changes to an observer
///
/// Implementations might re-render a view, write to a socket, or record
/// messages for later inspection.
pub trait Tunnel {
    /// Delivers a single change
    fn send_message(&self, message: &UpdateMessage);

    /// Delivers the complete game state
    ///
    /// Sent once when the tunnel subscribes.
    fn send_state(&self, state: &SyncMessage);

    /// Closes the tunnel
    fn close(self);
}

/// A game together with the tunnels observing it
#[derive_where(Debug)]
pub struct Session<T: Tunnel> {
    game: Game,
    #[derive_where(skip)]
    tunnels: Vec<T>,
}

impl<T: Tunnel> Session<T> {
    /// Wraps a game with no observers yet
    pub fn new(game: Game) -> Self {
        Self {
            game,
            tunnels: Vec::new(),
        }
    }

    /// Returns the observed game
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Registers an observer and sends it the current state
    pub fn subscribe(&mut self, tunnel: T) {
        tunnel.send_state(&self.state_message());
        self.tunnels.push(tunnel);
    }

    /// Builds a message carrying the complete game state
    pub fn state_message(&self) -> SyncMessage {
        SyncMessage::Board {
            categories: self.game.categories().to_vec(),
            players: self.game.players().to_vec(),
            selected_clue: self.game.selected_clue().map(Clue::id),
            leaders: self
                .game
                .current_leaders()
                .into_iter()
                .map(Player::id)
                .collect_vec(),
        }
    }

    fn announce(&self, message: &UpdateMessage) {
        for tunnel in &self.tunnels {
            tunnel.send_message(message);
        }
    }

    /// Selects a clue and announces it
    ///
    /// See [`Game::select_clue`].
    pub fn select_clue(&mut self, clue_id: Id) -> bool {
        if !self.game.select_clue(clue_id) {
            return false;
        }
        if let Some(clue) = self.game.selected_clue() {
            self.announce(&UpdateMessage::ClueSelected {
                clue_id,
                title: clue.title().to_owned(),
                point_value: clue.point_value(),
            });
        }
        true
    }

    /// Records a response and announces the new score
    ///
    /// See [`Game::respond_to_selected_clue`].
    pub fn respond_to_selected_clue(&mut self, player_id: Id, correct: bool) -> bool {
        if !self.game.respond_to_selected_clue(player_id, correct) {
            return false;
        }
        if let Some(player) = self.game.player(player_id) {
            self.announce(&UpdateMessage::Responded {
                player_id,
                correct,
                score: player.score(),
                selecting_player: self.game.selecting_player().map(Player::id),
            });
        }
        true
    }

    /// Marks the selected clue as done and announces it
    ///
    /// See [`Game::mark_selected_clue_as_done`].
    pub fn mark_selected_clue_as_done(&mut self) -> bool {
        let Some(clue_id) = self.game.selected_clue().map(Clue::id) else {
            return self.game.mark_selected_clue_as_done();
        };
        if !self.game.mark_selected_clue_as_done() {
            return false;
        }
        self.announce(&UpdateMessage::ClueDone {
            clue_id,
            round_complete: self.game.is_round_complete(),
        });
        true
    }

    /// Overwrites a score and announces it
    ///
    /// See [`Game::set_score`].
    pub fn set_score(&mut self, new_score: i64, player_id: Id) -> bool {
        if !self.game.set_score(new_score, player_id) {
            return false;
        }
        self.announce(&UpdateMessage::ScoreSet {
            player_id,
            score: new_score,
        });
        true
    }

    /// Closes every tunnel and hands back the game
    pub fn close(self) -> Game {
        for tunnel in self.tunnels {
            tunnel.close();
        }
        self.game
    }
}
