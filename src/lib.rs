//! # shield-engine
//!
//! Turn and combat resolution for Shield, a card game in which players
//! wear down each other's shield and life until one player remains.
//!
//! ## Rules in brief
//!
//! Each player holds a life card and two shield cards dealt from a shared
//! 52-card deck. On their turn a player does one of:
//!
//! - **Attack**: draw a card; its rank plus any banked charge hits a
//!   target's shield. What the shield cannot absorb comes off life and the
//!   shield is re-dealt.
//! - **Charge**: draw a card and bank its rank for the next attack.
//! - **Swap**: draw a card and replace one of any player's shield cards.
//!
//! Players whose life drops to zero or below leave the table.
//!
//! ## Architecture
//!
//! - **Injected randomness**: one seedable `GameRng` drives every shuffle,
//!   so a seed plus a sequence of choices replays a game exactly.
//! - **Collaborator seams**: the board asks an `InputProvider` for every
//!   decision and tells a `DisplaySink` about everything that happens.
//!   Scripted and random providers ship with the crate.
//! - **Card conservation**: cards move by value between the draw pile, the
//!   discard pile and player hands; none is ever copied or dropped.
//!
//! ## Modules
//!
//! - `core`: Players, actions, RNG, configuration, errors
//! - `cards`: Cards and the shared deck
//! - `game`: The board, turn cursor, events and collaborators
//! - `console`: Terminal input and output for the binary

pub mod cards;
pub mod console;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionRecord, GameRng, GameRngState, Player, PlayerId, Result, ShieldConfig, ShieldError,
    SHIELD_SIZE,
};

pub use crate::cards::{Card, CardFilter, Deck, Rank, Suit};

pub use crate::game::{
    play_game, Board, BoardBuilder, Choice, DisplaySink, EventLog, GameEvent, GameResult, InputProvider,
    NullDisplay, PlayerStatus, RandomInput, ScriptedInput, TurnCursor,
};
