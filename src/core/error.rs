//! Error types for the engine.

use thiserror::Error;

use super::action::ActionKind;

pub type Result<T> = std::result::Result<T, ShieldError>;

#[derive(Debug, Error)]
pub enum ShieldError {
    /// A card collection of the wrong size was assigned to a player.
    #[error("invalid card collection: expected {expected} cards, found {found}")]
    InvalidCardCollection { expected: usize, found: usize },

    /// Draw pile empty and recycling was not requested.
    #[error("draw pile is empty")]
    EmptyDeck,

    /// Draw pile and discard pile both empty. Cards have leaked somewhere.
    #[error("deck exhausted: draw and discard piles are both empty")]
    DeckExhausted,

    #[error("unsupported action: {0}")]
    UnsupportedAction(ActionKind),

    #[error("invalid {what} selection: index {index} out of {len}")]
    InvalidSelection {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// The input source has no more answers (end of input, exhausted script).
    #[error("input closed before a choice was made")]
    InputClosed,

    /// The script answered a different question than the one asked.
    #[error("expected an answer for {asked}, found {found}")]
    UnexpectedAnswer { asked: &'static str, found: String },

    #[error("a game needs at least one player")]
    NoPlayers,

    /// More names than there are seat ids.
    #[error("too many players: at most {max}, found {found}")]
    TooManyPlayers { max: usize, found: usize },

    /// Setup needs every hand dealt plus at least one card left to draw.
    #[error("deck too small: {players} players need more than {needed} cards, found {found}")]
    DeckTooSmall {
        players: usize,
        needed: usize,
        found: usize,
    },

    #[error("the game is already over")]
    GameOver,

    #[error("turn limit of {0} reached without a winner")]
    TurnLimitReached(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShieldError {
    /// Errors the engine answers by asking again instead of aborting.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ShieldError::UnsupportedAction(_) | ShieldError::InvalidSelection { .. }
        )
    }
}
