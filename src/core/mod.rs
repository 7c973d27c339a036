//! Core engine types: players, actions, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionKind, ActionRecord};
pub use config::ShieldConfig;
pub use error::{Result, ShieldError};
pub use player::{display_name, ChargedCards, Player, PlayerId, ShieldCards, SHIELD_SIZE};
pub use rng::{GameRng, GameRngState};
