//! Notifications the board sends to its display.
//!
//! Events describe what happened; they carry seat ids rather than names,
//! except for the roster snapshot and the elimination/winner notices, so a
//! display learns names from the roster sent at the start of every turn.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::core::{ActionKind, Player, PlayerId};

/// Visible state of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub id: PlayerId,
    pub name: String,
    pub life: Rank,
    pub life_card: Option<Card>,
    pub shield: Rank,
    pub shield_cards: Vec<Card>,
    pub charge: Rank,
    pub charged_cards: usize,
}

impl From<&Player> for PlayerStatus {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_owned(),
            life: player.life(),
            life_card: player.life_card().cloned(),
            shield: player.shield(),
            shield_cards: player.shield_cards().to_vec(),
            charge: player.charge(),
            charged_cards: player.charged_cards().len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Active roster at the start of a turn, in seat order.
    Roster { turn: u32, players: Vec<PlayerStatus> },

    TurnStarted { turn: u32, player: PlayerId },

    /// A choice was refused and will be asked again.
    SelectionRejected { player: PlayerId, reason: String },

    ActionChosen { player: PlayerId, action: ActionKind },

    Attacked {
        attacker: PlayerId,
        target: PlayerId,
        card: Card,
        charge: Rank,
        value: Rank,
        shield_before: Rank,
        shield_after: Rank,
        life_lost: Rank,
        life_after: Rank,
    },

    /// The target's shield broke and two fresh shield cards were dealt.
    ShieldRedealt { player: PlayerId, shield: Rank },

    Charged { player: PlayerId, card: Card, charge: Rank, charged_cards: usize },

    Swapped {
        initiator: PlayerId,
        target: PlayerId,
        index: usize,
        removed: Card,
        added: Card,
        shield: Rank,
    },

    Eliminated { player: PlayerId, name: String },

    Winner { player: PlayerId, name: String },
}
