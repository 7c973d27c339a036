//! The shared deck: a draw pile plus a discard pile.
//!
//! Cards flow draw pile → (engine) → discard pile → (recycle) → draw pile.
//! Every card handed out by [`Deck::draw`] is owned by the caller until it
//! is put back with [`Deck::discard`] or [`Deck::put_top`], so the deck never
//! duplicates or loses cards on its own.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::{Card, Rank, Suit, MAX_RANK, MIN_RANK};
use crate::core::{GameRng, Result, ShieldError};

/// Rank and/or suit filter for [`Deck::remove`].
///
/// A filter with neither field set matches every card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardFilter {
    pub rank: Option<Rank>,
    pub suit: Option<Suit>,
}

impl CardFilter {
    #[must_use]
    pub fn rank(rank: Rank) -> Self {
        Self { rank: Some(rank), suit: None }
    }

    #[must_use]
    pub fn suit(suit: Suit) -> Self {
        Self { rank: None, suit: Some(suit) }
    }

    #[must_use]
    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.rank.map_or(true, |r| card.rank() == r) && self.suit.map_or(true, |s| card.suit() == s)
    }
}

/// Draw pile (front is the top) and discard pile.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deck whose draw pile is `cards` in order, first element on top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            discard_pile: Vec::new(),
        }
    }

    /// One card per (rank, suit) pair, suit-major, unshuffled.
    #[must_use]
    pub fn generate(ranks: RangeInclusive<Rank>, suits: &[Suit]) -> Self {
        let cards = suits
            .iter()
            .flat_map(|&suit| ranks.clone().map(move |rank| Card::new(rank, suit)));
        Self::from_cards(cards)
    }

    /// The standard 52-card deck, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        Self::generate(MIN_RANK..=MAX_RANK, &Suit::ALL)
    }

    /// Randomize the draw pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Take the top card, recycling the discard pile if the draw pile is empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Card> {
        if self.cards.is_empty() {
            if self.discard_pile.is_empty() {
                return Err(ShieldError::DeckExhausted);
            }
            self.recycle(rng);
        }
        self.cards.pop_front().ok_or(ShieldError::DeckExhausted)
    }

    /// Take the top card without touching the discard pile.
    pub fn draw_no_recycle(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(ShieldError::EmptyDeck)
    }

    /// Move the whole discard pile under the draw pile and reshuffle.
    pub fn recycle(&mut self, rng: &mut GameRng) {
        debug!(recycled = self.discard_pile.len(), remaining = self.cards.len(), "recycling discard pile");
        self.cards.extend(self.discard_pile.drain(..));
        self.shuffle(rng);
    }

    /// Return a card to the top of the draw pile.
    pub fn put_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Insert into the draw pile at `index` (0 is the top), clamped to the pile size.
    pub fn insert(&mut self, index: usize, card: Card) {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
    }

    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    pub fn discard_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard_pile.extend(cards);
    }

    /// Remove every card matching `filter` from both piles.
    pub fn remove(&mut self, filter: CardFilter) -> Vec<Card> {
        let mut removed = Vec::new();

        let (taken, kept): (Vec<_>, Vec<_>) = self.cards.drain(..).partition(|c| filter.matches(c));
        removed.extend(taken);
        self.cards = kept.into();

        let (taken, kept): (Vec<_>, Vec<_>) = self.discard_pile.drain(..).partition(|c| filter.matches(c));
        removed.extend(taken);
        self.discard_pile = kept;

        removed
    }

    /// New deck with both operands' draw piles and discard piles concatenated.
    #[must_use]
    pub fn merge(&self, other: &Deck) -> Deck {
        Deck {
            cards: self.cards.iter().chain(other.cards.iter()).cloned().collect(),
            discard_pile: self
                .discard_pile
                .iter()
                .chain(other.discard_pile.iter())
                .cloned()
                .collect(),
        }
    }

    /// Cards in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards held by the deck across both piles.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.cards.len() + self.discard_pile.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Draw pile from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Whether this exact physical card (rank and suit) is in the draw pile.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c.identity() == card.identity())
    }
}
