//! Turn actions and the action history record.
//!
//! A turn is one of three supported actions:
//! - `Attack`: draw a card and strike another player's shield
//! - `Charge`: draw a card and bank it for the next attack
//! - `Swap`: draw a card and replace one of a player's shield cards
//!
//! `Custom` is a reserved menu slot with no rules behind it; choosing it is
//! rejected and the player is asked again.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Attack,
    Charge,
    Swap,
    Custom,
}

impl ActionKind {
    /// Menu order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Attack,
        ActionKind::Charge,
        ActionKind::Swap,
        ActionKind::Custom,
    ];

    /// Look up an action by its 0-based menu position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether the engine has rules for this action.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, ActionKind::Custom)
    }

    /// Whether the action needs a target player.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(self, ActionKind::Attack | ActionKind::Swap)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Attack => "Attack",
            ActionKind::Charge => "Charge",
            ActionKind::Swap => "Swap",
            ActionKind::Custom => "Custom",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved action, kept in the board's history for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Turn number the action was taken on (starts at 1).
    pub turn: u32,

    /// The acting player.
    pub player: PlayerId,

    pub action: ActionKind,

    /// Attack or swap target.
    pub target: Option<PlayerId>,

    /// The card drawn to resolve the action.
    pub drawn: Card,
}

impl ActionRecord {
    #[must_use]
    pub fn new(turn: u32, player: PlayerId, action: ActionKind, target: Option<PlayerId>, drawn: Card) -> Self {
        Self {
            turn,
            player,
            action,
            target,
            drawn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_from_index() {
        assert_eq!(ActionKind::from_index(0), Some(ActionKind::Attack));
        assert_eq!(ActionKind::from_index(1), Some(ActionKind::Charge));
        assert_eq!(ActionKind::from_index(2), Some(ActionKind::Swap));
        assert_eq!(ActionKind::from_index(3), Some(ActionKind::Custom));
        assert_eq!(ActionKind::from_index(4), None);
    }

    #[test]
    fn test_supported_actions() {
        assert!(ActionKind::Attack.is_supported());
        assert!(ActionKind::Charge.is_supported());
        assert!(ActionKind::Swap.is_supported());
        assert!(!ActionKind::Custom.is_supported());
    }

    #[test]
    fn test_needs_target() {
        assert!(ActionKind::Attack.needs_target());
        assert!(ActionKind::Swap.needs_target());
        assert!(!ActionKind::Charge.needs_target());
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            3,
            PlayerId::new(0),
            ActionKind::Attack,
            Some(PlayerId::new(2)),
            Card::new(6, Suit::Clubs),
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
        assert_eq!(deserialized.drawn.identity(), (6, Suit::Clubs));
    }
}
