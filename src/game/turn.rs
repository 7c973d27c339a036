//! Round-robin turn cursor over a shrinking roster.
//!
//! The cursor holds the index of the player whose turn it is (or none
//! before the first turn). When a seat is removed, [`TurnCursor::on_removed`]
//! shifts the cursor so that the following turn goes to whoever would have
//! played next had the removed player never been seated.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCursor {
    current: Option<usize>,
}

impl TurnCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor placed on `index`, as if that player is mid-turn.
    #[must_use]
    pub fn at(index: usize) -> Self {
        Self { current: Some(index) }
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Index that [`TurnCursor::advance`] would move to.
    #[must_use]
    pub fn peek_next(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.current.map_or(0, |c| (c + 1) % len))
    }

    /// Move to the next seat of a roster of `len` players.
    pub fn advance(&mut self, len: usize) -> Option<usize> {
        self.current = self.peek_next(len);
        self.current
    }

    /// Re-index after the player at `removed` left the roster.
    ///
    /// - Removed before the cursor: everyone after shifted down one, so the
    ///   cursor follows the current player down.
    /// - Removed at the cursor: step back one so the player who slid into
    ///   this index plays next.
    /// - Removed after the cursor: nothing moves.
    pub fn on_removed(&mut self, removed: usize) {
        if let Some(current) = self.current {
            if removed < current {
                self.current = Some(current - 1);
            } else if removed == current {
                self.current = current.checked_sub(1);
            }
        }
    }
}
