//! Turn and combat engine.
//!
//! ## Key Types
//!
//! - `Board`: Seats, the shared deck and turn resolution
//! - `BoardBuilder`: Seat names, custom deck and config
//! - `TurnCursor`: Round-robin index that survives eliminations
//! - `InputProvider` / `DisplaySink`: Collaborator seams
//! - `GameEvent`: Everything the display is told

pub mod board;
pub mod collaborator;
pub mod event;
pub mod policy;
pub mod turn;

pub use board::{Board, BoardBuilder, GameResult, MAX_PLAYERS};
pub use collaborator::{DisplaySink, InputProvider, NullDisplay};
pub use event::{GameEvent, PlayerStatus};
pub use policy::{Choice, EventLog, RandomInput, ScriptedInput};
pub use turn::TurnCursor;

use crate::cards::Deck;
use crate::core::{Result, ShieldConfig};

/// Set up a game with default rules and play it to the end.
///
/// Returns the winner's display name.
pub fn play_game<S, I, D>(
    names: impl IntoIterator<Item = S>,
    deck: Option<Deck>,
    seed: u64,
    input: &mut I,
    display: &mut D,
) -> Result<String>
where
    S: AsRef<str>,
    I: InputProvider + ?Sized,
    D: DisplaySink + ?Sized,
{
    let mut builder = BoardBuilder::new().players(names).config(ShieldConfig::default());
    if let Some(deck) = deck {
        builder = builder.deck(deck);
    }
    let mut board = builder.build(seed)?;
    let result = board.run(input, display)?;
    Ok(result.name)
}
