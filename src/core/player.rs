//! Players and their card-backed totals.
//!
//! ## PlayerId
//!
//! Seat identifier assigned at setup, stable for the whole game even as
//! players are eliminated and the active roster shrinks.
//!
//! ## Player
//!
//! Life, shield and charge are never set directly. Each is derived from
//! the cards backing it:
//!
//! - `life = life_card.rank - wounds`
//! - `shield = sum(shield_cards.rank) - shield_wear`
//! - `charge = sum(charged_cards.rank)`
//!
//! Reassigning the backing cards resets the matching counter, so a fresh
//! shield always totals exactly the ranks of its two cards.
//!
//! Only the life card and shield cards are held. Charged cards are a tally
//! of what was banked; the cards themselves go back to the discard pile as
//! soon as they are drawn, so charging never takes cards out of circulation.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{Result, ShieldError};
use crate::cards::{Card, Rank};

/// Number of shield cards a player holds.
pub const SHIELD_SIZE: usize = 2;

pub type ShieldCards = SmallVec<[Card; SHIELD_SIZE]>;
pub type ChargedCards = SmallVec<[Card; 4]>;

/// Player seat identifier. The first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Capitalize the first character and lowercase the rest.
#[must_use]
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,

    life: Rank,
    life_card: Option<Card>,
    wounds: Rank,

    shield: Rank,
    shield_cards: ShieldCards,
    shield_wear: Rank,

    charge: Rank,
    charged_cards: ChargedCards,
}

impl Player {
    /// Create a player with no cards and zero totals.
    #[must_use]
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: display_name(name),
            life: 0,
            life_card: None,
            wounds: 0,
            shield: 0,
            shield_cards: SmallVec::new(),
            shield_wear: 0,
            charge: 0,
            charged_cards: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn life(&self) -> Rank {
        self.life
    }

    #[must_use]
    pub fn life_card(&self) -> Option<&Card> {
        self.life_card.as_ref()
    }

    #[must_use]
    pub fn shield(&self) -> Rank {
        self.shield
    }

    #[must_use]
    pub fn shield_cards(&self) -> &[Card] {
        &self.shield_cards
    }

    /// Shield absorbed by attacks since the shield cards were last assigned.
    #[must_use]
    pub fn shield_wear(&self) -> Rank {
        self.shield_wear
    }

    #[must_use]
    pub fn charge(&self) -> Rank {
        self.charge
    }

    #[must_use]
    pub fn charged_cards(&self) -> &[Card] {
        &self.charged_cards
    }

    /// Life lost since the life card was assigned.
    #[must_use]
    pub fn wounds(&self) -> Rank {
        self.wounds
    }

    /// Whether life has dropped to zero or below. Removal is up to the board.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.life <= 0
    }

    /// Number of cards this player currently holds. Charged cards are not
    /// held.
    #[must_use]
    pub fn held_cards(&self) -> usize {
        usize::from(self.life_card.is_some()) + self.shield_cards.len()
    }

    /// Assign the life card, returning the previous one.
    pub fn set_life_card(&mut self, card: Card) -> Option<Card> {
        self.life = card.rank();
        self.wounds = 0;
        self.life_card.replace(card)
    }

    /// Assign both shield cards at once, returning the previous ones.
    pub fn set_shield_cards(&mut self, cards: [Card; SHIELD_SIZE]) -> ShieldCards {
        let previous = std::mem::replace(&mut self.shield_cards, SmallVec::from_buf(cards));
        self.recompute_shield();
        previous
    }

    /// Checked form of [`Player::set_shield_cards`] for arbitrary collections.
    ///
    /// Nothing is changed when the count is wrong.
    pub fn try_set_shield_cards(&mut self, cards: Vec<Card>) -> Result<ShieldCards> {
        let found = cards.len();
        let cards: [Card; SHIELD_SIZE] = cards
            .try_into()
            .map_err(|_| ShieldError::InvalidCardCollection { expected: SHIELD_SIZE, found })?;
        Ok(self.set_shield_cards(cards))
    }

    /// Replace one shield card, returning the card it displaced.
    pub fn replace_shield_card(&mut self, index: usize, card: Card) -> Result<Card> {
        let len = self.shield_cards.len();
        let slot = self.shield_cards.get_mut(index).ok_or(ShieldError::InvalidSelection {
            what: "shield card",
            index,
            len,
        })?;
        let previous = std::mem::replace(slot, card);
        self.recompute_shield();
        Ok(previous)
    }

    /// Hand over the shield cards, leaving the player unshielded.
    pub fn take_shield_cards(&mut self) -> ShieldCards {
        let cards = std::mem::take(&mut self.shield_cards);
        self.recompute_shield();
        cards
    }

    /// Absorb part of an attack without breaking the shield.
    pub fn wear_shield(&mut self, amount: Rank) {
        self.shield_wear += amount;
        self.shield -= amount;
    }

    /// Lose life.
    pub fn take_damage(&mut self, amount: Rank) {
        self.wounds += amount;
        self.life -= amount;
    }

    /// Bank a drawn card's rank for the next attack. The card itself is
    /// not kept; the caller still owns it.
    pub fn add_charge(&mut self, card: &Card) {
        self.charge += card.rank();
        self.charged_cards.push(card.clone());
    }

    /// Clear the charge, returning the amount spent.
    pub fn reset_charges(&mut self) -> Rank {
        self.charged_cards.clear();
        std::mem::take(&mut self.charge)
    }

    /// Give up the shield after elimination. The life card stays.
    pub fn surrender_cards(&mut self) -> ShieldCards {
        self.reset_charges();
        self.take_shield_cards()
    }

    fn recompute_shield(&mut self) {
        self.shield_wear = 0;
        self.shield = self.shield_cards.iter().map(Card::rank).sum();
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (life {}, shield {}, charge {})",
            self.name, self.life, self.shield, self.charge
        )
    }
}
