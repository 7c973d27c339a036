//! Playing cards.
//!
//! A `Card` is an immutable rank + suit pair. Cards compare by rank only:
//! two cards of equal rank are equal for combat and sorting purposes even
//! when their suits differ. Use [`Card::identity`] when the physical card
//! matters (conservation checks, deck filtering).

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric face value. Conventionally 1-13; any value is accepted.
pub type Rank = i32;

/// Lowest rank of the standard set.
pub const MIN_RANK: Rank = 1;

/// Highest rank of the standard set.
pub const MAX_RANK: Rank = 13;

/// Default threshold at or above which a card counts as a face card.
pub const DEFAULT_FACE_CARD_THRESHOLD: Rank = 11;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    /// The four standard suits in deck-generation order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    /// Display symbol for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }

    /// Lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// Deliberately not `Copy`: a card lives in exactly one pile or hand and
/// moves between them by value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card. No validation is applied to `rank`.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Face card under the default threshold.
    #[must_use]
    pub const fn is_face_card(&self) -> bool {
        self.is_face_card_at(DEFAULT_FACE_CARD_THRESHOLD)
    }

    /// Face card under a ruleset-specific threshold.
    #[must_use]
    pub const fn is_face_card_at(&self, threshold: Rank) -> bool {
        self.rank >= threshold
    }

    /// Rank and suit together, which distinguishes physical cards.
    #[must_use]
    pub const fn identity(&self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.suit)
    }
}
