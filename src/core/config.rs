//! Ruleset configuration.

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, DEFAULT_FACE_CARD_THRESHOLD};

/// Ruleset and setup options for a game of Shield.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShieldConfig {
    /// Rank at or above which a card is a face card.
    /// Descriptive only: no rule consumes it.
    pub face_card_threshold: Rank,

    /// Shuffle the seat order at setup.
    pub shuffle_players: bool,

    /// Shuffle the deck at setup.
    /// Turn off to deal a hand-built deck in its given order.
    pub shuffle_deck: bool,

    /// Offer the attacker themself as an attack target.
    pub allow_self_attack: bool,

    /// Stop `run` with an error after this many turns (None = unlimited).
    pub max_turns: Option<u32>,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            face_card_threshold: DEFAULT_FACE_CARD_THRESHOLD,
            shuffle_players: true,
            shuffle_deck: true,
            allow_self_attack: false,
            max_turns: None,
        }
    }
}

impl ShieldConfig {
    /// Config that keeps both seat order and deck order as given.
    #[must_use]
    pub fn deterministic() -> Self {
        Self::default().with_shuffle_players(false).with_shuffle_deck(false)
    }

    #[must_use]
    pub fn with_face_card_threshold(mut self, threshold: Rank) -> Self {
        self.face_card_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_shuffle_players(mut self, shuffle: bool) -> Self {
        self.shuffle_players = shuffle;
        self
    }

    #[must_use]
    pub fn with_shuffle_deck(mut self, shuffle: bool) -> Self {
        self.shuffle_deck = shuffle;
        self
    }

    #[must_use]
    pub fn with_self_attack(mut self, allow: bool) -> Self {
        self.allow_self_attack = allow;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }
}
