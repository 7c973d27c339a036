//! Seams between the board and the outside world.
//!
//! The board never reads input or prints anything itself. An
//! `InputProvider` answers the three questions a turn can ask, and a
//! `DisplaySink` receives every [`GameEvent`]. Swapping in scripted or
//! random providers makes the engine fully testable.
//!
//! ## Implementation Notes
//!
//! - Answers are indexes; the board validates them and asks again when they
//!   are out of range, so providers do not need to be careful.
//! - Returning an error that is not recoverable (for example
//!   `ShieldError::InputClosed`) aborts the game.

use super::event::GameEvent;
use crate::core::{ActionKind, Player, Result};

pub trait InputProvider {
    /// Pick the action for `current`'s turn.
    fn choose_action(&mut self, current: &Player) -> Result<ActionKind>;

    /// Pick a target from `roster` and return its index.
    ///
    /// When `include_self` is false, choosing `current` is refused.
    fn choose_player(&mut self, current: &Player, roster: &[Player], include_self: bool) -> Result<usize>;

    /// Pick which of `target`'s shield cards `chooser` replaces.
    fn choose_shield_card(&mut self, chooser: &Player, target: &Player) -> Result<usize>;
}

pub trait DisplaySink {
    fn show(&mut self, event: &GameEvent);
}

/// Display that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn show(&mut self, _event: &GameEvent) {}
}

impl<T: InputProvider + ?Sized> InputProvider for &mut T {
    fn choose_action(&mut self, current: &Player) -> Result<ActionKind> {
        (**self).choose_action(current)
    }

    fn choose_player(&mut self, current: &Player, roster: &[Player], include_self: bool) -> Result<usize> {
        (**self).choose_player(current, roster, include_self)
    }

    fn choose_shield_card(&mut self, chooser: &Player, target: &Player) -> Result<usize> {
        (**self).choose_shield_card(chooser, target)
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn show(&mut self, event: &GameEvent) {
        (**self).show(event);
    }
}
