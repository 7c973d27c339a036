//! The board: seats, the shared deck, and turn resolution.
//!
//! A turn runs in four steps:
//! 1. Show the roster and move the cursor to the next active seat.
//! 2. Ask for an action (and its target / shield card), re-asking on any
//!    refused answer before anything is mutated.
//! 3. Resolve the action against the deck and the players.
//! 4. Remove defeated players and re-index the cursor.
//!
//! The game ends when a single player remains.

use tracing::{debug, info, instrument, warn};

use super::collaborator::{DisplaySink, InputProvider};
use super::event::{GameEvent, PlayerStatus};
use super::turn::TurnCursor;
use crate::cards::{Card, Deck};
use crate::core::{
    ActionKind, ActionRecord, GameRng, GameRngState, Player, PlayerId, Result, ShieldConfig, ShieldError,
    SHIELD_SIZE,
};

/// Seat ids are a `u8`.
pub const MAX_PLAYERS: usize = u8::MAX as usize + 1;

/// Life card plus shield cards.
const CARDS_DEALT: usize = 1 + SHIELD_SIZE;

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: PlayerId,
    pub name: String,
    /// Turns played.
    pub turns: u32,
}

/// Builder for a [`Board`].
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    names: Vec<String>,
    deck: Option<Deck>,
    config: ShieldConfig,
}

impl BoardBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat players in this order (before any configured shuffle).
    #[must_use]
    pub fn players<S: AsRef<str>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = names.into_iter().map(|n| n.as_ref().to_owned()).collect();
        self
    }

    /// Play with a custom deck instead of the standard 52 cards.
    #[must_use]
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    #[must_use]
    pub fn config(mut self, config: ShieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Build with a seeded RNG.
    pub fn build(self, seed: u64) -> Result<Board> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build, seat and deal.
    ///
    /// The deck must hold more than the life and shield cards of every
    /// player, so at least one card is always left to draw during play.
    pub fn build_with_rng(self, mut rng: GameRng) -> Result<Board> {
        if self.names.is_empty() {
            return Err(ShieldError::NoPlayers);
        }

        let mut players = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let id = u8::try_from(i).map_err(|_| ShieldError::TooManyPlayers {
                    max: MAX_PLAYERS,
                    found: self.names.len(),
                })?;
                Ok(Player::new(PlayerId::new(id), name))
            })
            .collect::<Result<Vec<Player>>>()?;

        let mut deck = self.deck.unwrap_or_else(Deck::standard);
        let total_cards = deck.total_len();
        let needed = players.len() * CARDS_DEALT;
        if total_cards <= needed {
            return Err(ShieldError::DeckTooSmall {
                players: players.len(),
                needed,
                found: total_cards,
            });
        }

        if self.config.shuffle_players {
            rng.shuffle(&mut players);
        }
        if self.config.shuffle_deck {
            deck.shuffle(&mut rng);
        }

        for player in &mut players {
            let life = deck.draw(&mut rng)?;
            let first = deck.draw(&mut rng)?;
            let second = deck.draw(&mut rng)?;
            player.set_life_card(life);
            player.set_shield_cards([first, second]);
        }

        info!(
            players = players.len(),
            cards = total_cards,
            seed = rng.seed(),
            "game set up"
        );

        Ok(Board {
            config: self.config,
            rng,
            deck,
            players,
            eliminated: Vec::new(),
            cursor: TurnCursor::new(),
            turn: 0,
            history: Vec::new(),
            total_cards,
        })
    }
}

/// A game of Shield in progress.
#[derive(Clone, Debug)]
pub struct Board {
    config: ShieldConfig,
    rng: GameRng,
    deck: Deck,
    /// Active players in seat order.
    players: Vec<Player>,
    /// Eliminated players, in elimination order.
    eliminated: Vec<Player>,
    cursor: TurnCursor,
    turn: u32,
    history: Vec<ActionRecord>,
    total_cards: usize,
}

impl Board {
    /// Standard deck, default config.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>, seed: u64) -> Result<Self> {
        BoardBuilder::new().players(names).build(seed)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &ShieldConfig {
        &self.config
    }

    /// Active players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn eliminated(&self) -> &[Player] {
        &self.eliminated
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Turns played so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    #[must_use]
    pub fn cursor(&self) -> TurnCursor {
        self.cursor
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// The player whose turn it is (or was, between turns).
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.cursor.current().and_then(|i| self.players.get(i))
    }

    /// The player who will act on the next turn.
    #[must_use]
    pub fn next_player(&self) -> Option<&Player> {
        self.cursor.peek_next(self.players.len()).and_then(|i| self.players.get(i))
    }

    /// Roster index of an active player.
    #[must_use]
    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    /// Any player, active or eliminated.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().chain(&self.eliminated).find(|p| p.id() == id)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.len() == 1
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.players.as_slice() {
            [winner] => Some(winner),
            _ => None,
        }
    }

    /// Card count the deck started with.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Cards currently accounted for across both piles and every hand.
    /// Always equal to [`Board::total_cards`] between operations.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.total_len()
            + self
                .players
                .iter()
                .chain(&self.eliminated)
                .map(Player::held_cards)
                .sum::<usize>()
    }

    /// Face-card classification under this game's threshold. No rule
    /// depends on it.
    #[must_use]
    pub fn is_face_card(&self, card: &Card) -> bool {
        card.is_face_card_at(self.config.face_card_threshold)
    }

    /// Roster snapshot for display.
    #[must_use]
    pub fn roster(&self) -> Vec<PlayerStatus> {
        self.players.iter().map(PlayerStatus::from).collect()
    }

    // === Driving the game ===

    /// Play turns until one player remains.
    #[instrument(level = "debug", skip_all)]
    pub fn run<I, D>(&mut self, input: &mut I, display: &mut D) -> Result<GameResult>
    where
        I: InputProvider + ?Sized,
        D: DisplaySink + ?Sized,
    {
        if self.is_over() {
            self.announce_winner(display);
        }

        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            if let Some(max) = self.config.max_turns {
                if self.turn >= max {
                    warn!(max, "turn limit reached");
                    return Err(ShieldError::TurnLimitReached(max));
                }
            }
            self.play_turn(input, display)?;
        }
    }

    /// Result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.winner().map(|w| GameResult {
            winner: w.id(),
            name: w.name().to_owned(),
            turns: self.turn,
        })
    }

    /// Play a single turn for the next seat.
    #[instrument(level = "debug", skip_all, fields(turn = self.turn + 1))]
    pub fn play_turn<I, D>(&mut self, input: &mut I, display: &mut D) -> Result<()>
    where
        I: InputProvider + ?Sized,
        D: DisplaySink + ?Sized,
    {
        if self.is_over() {
            return Err(ShieldError::GameOver);
        }

        self.turn += 1;
        display.show(&GameEvent::Roster {
            turn: self.turn,
            players: self.roster(),
        });

        let seat = self.cursor.advance(self.players.len()).ok_or(ShieldError::NoPlayers)?;
        let id = self.players[seat].id();
        debug!(seat, player = %id, "turn started");
        display.show(&GameEvent::TurnStarted { turn: self.turn, player: id });

        let action = retry(display, id, || {
            let action = input.choose_action(&self.players[seat])?;
            if action.is_supported() {
                Ok(action)
            } else {
                Err(ShieldError::UnsupportedAction(action))
            }
        })?;
        display.show(&GameEvent::ActionChosen { player: id, action });

        let events = match action {
            ActionKind::Attack => {
                let include_self = self.config.allow_self_attack;
                let target = retry(display, id, || {
                    let index = input.choose_player(&self.players[seat], &self.players, include_self)?;
                    self.check_target(seat, index, include_self)
                })?;
                self.attack(seat, target)?
            }
            ActionKind::Charge => self.charge(seat)?,
            ActionKind::Swap => {
                let target = retry(display, id, || {
                    let index = input.choose_player(&self.players[seat], &self.players, true)?;
                    self.check_target(seat, index, true)
                })?;
                let card = retry(display, id, || {
                    let index = input.choose_shield_card(&self.players[seat], &self.players[target])?;
                    self.check_shield_card(target, index)
                })?;
                self.swap(seat, target, card)?
            }
            ActionKind::Custom => return Err(ShieldError::UnsupportedAction(action)),
        };
        for event in &events {
            display.show(event);
        }

        for event in self.remove_defeated() {
            display.show(&event);
        }
        if self.is_over() {
            self.announce_winner(display);
        }

        Ok(())
    }

    // === Action resolution ===
    //
    // Seats are indexes into `players()`. Every check runs before the first
    // card is drawn, so a refused action leaves the board untouched.

    /// `attacker` draws a card and strikes `target`.
    ///
    /// Attack value is the card's rank plus the attacker's charge, which is
    /// spent. The target's shield absorbs what it can; anything beyond goes
    /// to life, clears the target's charge and breaks the shield, which is
    /// then re-dealt from the deck. Defeated targets are not re-dealt.
    ///
    /// Attacking oneself is refused unless the config allows it.
    pub fn attack(&mut self, attacker: usize, target: usize) -> Result<Vec<GameEvent>> {
        self.check_seat(attacker)?;
        self.check_target(attacker, target, self.config.allow_self_attack)?;

        let card = self.deck.draw(&mut self.rng)?;
        debug!(%card, face = self.is_face_card(&card), "attack card drawn");
        let charge = self.players[attacker].charge();
        let value = card.rank() + charge;
        self.players[attacker].reset_charges();

        let attacker_id = self.players[attacker].id();
        let target_id = self.players[target].id();
        self.record(attacker_id, ActionKind::Attack, Some(target_id), &card);
        self.deck.discard(card.clone());

        let defender = &mut self.players[target];
        let shield_before = defender.shield();
        let remainder = shield_before - value;

        let mut events = Vec::with_capacity(2);
        if remainder > 0 {
            defender.wear_shield(value);
            events.push(GameEvent::Attacked {
                attacker: attacker_id,
                target: target_id,
                card,
                charge,
                value,
                shield_before,
                shield_after: defender.shield(),
                life_lost: 0,
                life_after: defender.life(),
            });
            debug!(%attacker_id, %target_id, value, shield = defender.shield(), "shield absorbed attack");
            return Ok(events);
        }

        let life_lost = -remainder;
        defender.take_damage(life_lost);
        defender.reset_charges();
        let broken = defender.take_shield_cards();
        let defeated = defender.is_defeated();
        events.push(GameEvent::Attacked {
            attacker: attacker_id,
            target: target_id,
            card,
            charge,
            value,
            shield_before,
            shield_after: 0,
            life_lost,
            life_after: defender.life(),
        });
        debug!(%attacker_id, %target_id, value, life_lost, "shield broken");

        self.deck.discard_all(broken);

        if !defeated {
            let first = self.deck.draw(&mut self.rng)?;
            let second = self.deck.draw(&mut self.rng)?;
            let defender = &mut self.players[target];
            defender.set_shield_cards([first, second]);
            events.push(GameEvent::ShieldRedealt {
                player: target_id,
                shield: defender.shield(),
            });
        }

        Ok(events)
    }

    /// `seat` draws a card and banks its rank for their next attack. The
    /// card goes straight to the discard pile.
    pub fn charge(&mut self, seat: usize) -> Result<Vec<GameEvent>> {
        self.check_seat(seat)?;

        let card = self.deck.draw(&mut self.rng)?;
        let id = self.players[seat].id();
        self.record(id, ActionKind::Charge, None, &card);

        let player = &mut self.players[seat];
        player.add_charge(&card);
        let charge = player.charge();
        let charged_cards = player.charged_cards().len();
        debug!(player = %id, charge, "charged");

        self.deck.discard(card.clone());
        Ok(vec![GameEvent::Charged {
            player: id,
            card,
            charge,
            charged_cards,
        }])
    }

    /// `initiator` draws a card and puts it in place of `target`'s shield
    /// card at `index`. The displaced card is discarded.
    pub fn swap(&mut self, initiator: usize, target: usize, index: usize) -> Result<Vec<GameEvent>> {
        self.check_seat(initiator)?;
        self.check_seat(target)?;
        self.check_shield_card(target, index)?;

        let card = self.deck.draw(&mut self.rng)?;
        let initiator_id = self.players[initiator].id();
        let target_id = self.players[target].id();
        self.record(initiator_id, ActionKind::Swap, Some(target_id), &card);

        let removed = self.players[target].replace_shield_card(index, card.clone())?;
        self.deck.discard(removed.clone());
        let shield = self.players[target].shield();
        debug!(%initiator_id, %target_id, index, shield, "shield card swapped");

        Ok(vec![GameEvent::Swapped {
            initiator: initiator_id,
            target: target_id,
            index,
            removed,
            added: card,
            shield,
        }])
    }

    /// Move every defeated player out of the active roster.
    ///
    /// Their shield cards go to the discard pile and their charge is
    /// cleared. The player record (with its life card) is kept in
    /// [`Board::eliminated`].
    pub fn remove_defeated(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        for seat in (0..self.players.len()).rev() {
            if !self.players[seat].is_defeated() {
                continue;
            }
            let mut player = self.players.remove(seat);
            self.cursor.on_removed(seat);
            let surrendered = player.surrender_cards();
            self.deck.discard_all(surrendered);

            info!(player = %player.id(), name = player.name(), life = player.life(), "player eliminated");
            events.push(GameEvent::Eliminated {
                player: player.id(),
                name: player.name().to_owned(),
            });
            self.eliminated.push(player);
        }

        events
    }

    // === Helpers ===

    fn announce_winner<D: DisplaySink + ?Sized>(&self, display: &mut D) {
        if let Some(winner) = self.winner() {
            info!(player = %winner.id(), name = winner.name(), turns = self.turn, "winner");
            display.show(&GameEvent::Winner {
                player: winner.id(),
                name: winner.name().to_owned(),
            });
        }
    }

    fn record(&mut self, player: PlayerId, action: ActionKind, target: Option<PlayerId>, drawn: &Card) {
        self.history
            .push(ActionRecord::new(self.turn, player, action, target, drawn.clone()));
    }

    fn check_seat(&self, seat: usize) -> Result<()> {
        if seat < self.players.len() {
            Ok(())
        } else {
            Err(ShieldError::InvalidSelection {
                what: "player",
                index: seat,
                len: self.players.len(),
            })
        }
    }

    fn check_target(&self, seat: usize, index: usize, include_self: bool) -> Result<usize> {
        self.check_seat(index)?;
        if !include_self && index == seat {
            return Err(ShieldError::InvalidSelection {
                what: "target (self)",
                index,
                len: self.players.len(),
            });
        }
        Ok(index)
    }

    fn check_shield_card(&self, target: usize, index: usize) -> Result<usize> {
        self.check_seat(target)?;
        let len = self.players[target].shield_cards().len();
        if index < len {
            Ok(index)
        } else {
            Err(ShieldError::InvalidSelection {
                what: "shield card",
                index,
                len,
            })
        }
    }
}

/// Ask until the answer is accepted, reporting each refusal.
fn retry<T, D>(display: &mut D, player: PlayerId, mut ask: impl FnMut() -> Result<T>) -> Result<T>
where
    D: DisplaySink + ?Sized,
{
    loop {
        match ask() {
            Ok(value) => return Ok(value),
            Err(err) if err.is_recoverable() => {
                warn!(%player, %err, "selection rejected");
                display.show(&GameEvent::SelectionRejected {
                    player,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::game::collaborator::NullDisplay;
    use crate::game::policy::{Choice, EventLog, RandomInput, ScriptedInput};

    /// Deck dealt in exactly this order: each player takes life, shield, shield.
    fn stacked(ranks: &[Rank]) -> Deck {
        Deck::from_cards(
            ranks
                .iter()
                .enumerate()
                .map(|(i, &rank)| Card::new(rank, Suit::ALL[i % 4])),
        )
    }

    fn board(names: &[&str], ranks: &[Rank]) -> Board {
        BoardBuilder::new()
            .players(names.iter().copied())
            .deck(stacked(ranks))
            .config(ShieldConfig::deterministic())
            .build(7)
            .unwrap()
    }

    fn turn_order(log: &EventLog) -> Vec<u8> {
        log.events()
            .iter()
            .filter_map(|e| match e {
                GameEvent::TurnStarted { player, .. } => Some(player.0),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_setup_deals_life_and_shield() {
        let board = board(&["lucas", "julie"], &[10, 4, 4, 9, 3, 5, 1, 1]);

        let lucas = &board.players()[0];
        assert_eq!(lucas.name(), "Lucas");
        assert_eq!(lucas.life(), 10);
        assert_eq!(lucas.shield(), 8);

        let julie = &board.players()[1];
        assert_eq!(julie.life(), 9);
        assert_eq!(julie.shield(), 8);

        assert_eq!(board.deck().len(), 2);
        assert_eq!(board.total_cards(), 8);
        assert_eq!(board.cards_in_play(), 8);
        assert_eq!(board.turn(), 0);
        assert_eq!(board.next_player().map(Player::name), Some("Lucas"));
    }

    #[test]
    fn test_setup_requires_players() {
        let names: [&str; 0] = [];
        assert!(matches!(Board::new(names, 1), Err(ShieldError::NoPlayers)));
    }

    #[test]
    fn test_setup_with_too_few_cards() {
        let result = BoardBuilder::new()
            .players(["a", "b"])
            .deck(stacked(&[1, 2, 3, 4]))
            .config(ShieldConfig::deterministic())
            .build(1);
        assert!(matches!(result, Err(ShieldError::DeckTooSmall { players: 2, needed: 6, found: 4 })));

        // Every card dealt leaves nothing to draw
        let result = BoardBuilder::new()
            .players(["a", "b"])
            .deck(stacked(&[10, 4, 4, 10, 4, 4]))
            .build(1);
        assert!(matches!(result, Err(ShieldError::DeckTooSmall { found: 6, .. })));
    }

    #[test]
    fn test_setup_with_too_many_players() {
        let names: Vec<String> = (0..=MAX_PLAYERS).map(|i| format!("p{i}")).collect();
        let result = Board::new(&names, 1);
        assert!(matches!(
            result,
            Err(ShieldError::TooManyPlayers { max: 256, found: 257 })
        ));

        // A full table gets seat ids; only the standard deck is too small for it
        let result = Board::new(&names[..MAX_PLAYERS], 1);
        assert!(matches!(
            result,
            Err(ShieldError::DeckTooSmall { players: 256, needed: 768, found: 52 })
        ));
    }

    #[test]
    fn test_seeded_setup_is_reproducible() {
        let names = ["lucas", "julie", "baptiste", "alan"];
        let a = Board::new(names, 99).unwrap();
        let b = Board::new(names, 99).unwrap();

        assert_eq!(a.roster(), b.roster());
        assert_eq!(a.rng_state(), b.rng_state());
    }

    #[test]
    fn test_face_card_threshold_from_config() {
        let standard = board(&["a"], &[10, 4, 4, 1]);
        assert!(!standard.is_face_card(&Card::new(10, Suit::Hearts)));
        assert!(standard.is_face_card(&Card::new(11, Suit::Hearts)));

        let lenient = BoardBuilder::new()
            .players(["a"])
            .deck(stacked(&[10, 4, 4, 1]))
            .config(ShieldConfig::deterministic().with_face_card_threshold(10))
            .build(1)
            .unwrap();
        assert!(lenient.is_face_card(&Card::new(10, Suit::Hearts)));
    }

    #[test]
    fn test_attack_partial_absorption() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 3, 5, 5, 1]);

        let events = board.attack(0, 1).unwrap();

        let target = &board.players()[1];
        assert_eq!(target.shield(), 3);
        assert_eq!(target.life(), 10);
        let shield_cards: Vec<_> = target.shield_cards().iter().map(Card::identity).collect();
        assert_eq!(shield_cards, vec![(3, Suit::Spades), (5, Suit::Clubs)]);

        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            GameEvent::Attacked { value: 5, shield_before: 8, shield_after: 3, life_lost: 0, .. }
        ));
        assert_eq!(board.deck().discard_len(), 1);
        assert_eq!(board.cards_in_play(), board.total_cards());
    }

    #[test]
    fn test_attack_breakthrough() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 1, 3, 2, 4, 5, 6, 9, 1, 1]);
        board.charge(0).unwrap();
        board.charge(1).unwrap();
        assert_eq!(board.players()[0].charge(), 2);
        assert_eq!(board.players()[1].charge(), 4);

        let events = board.attack(0, 1).unwrap();

        let attacker = &board.players()[0];
        let target = &board.players()[1];
        assert_eq!(attacker.charge(), 0);
        assert_eq!(target.life(), 7);
        assert_eq!(target.charge(), 0);
        assert!(target.charged_cards().is_empty());
        assert_eq!(target.shield(), 15);

        assert!(matches!(
            events[0],
            GameEvent::Attacked { value: 7, charge: 2, shield_before: 4, life_lost: 3, life_after: 7, .. }
        ));
        assert!(matches!(events[1], GameEvent::ShieldRedealt { shield: 15, .. }));

        // spent charges, attack card and broken shield
        assert_eq!(board.deck().discard_len(), 5);
        assert_eq!(board.cards_in_play(), board.total_cards());
    }

    #[test]
    fn test_exact_break_redeals_without_damage() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 3, 5, 8, 2, 2]);

        let events = board.attack(0, 1).unwrap();

        let target = &board.players()[1];
        assert_eq!(target.life(), 10);
        assert_eq!(target.shield(), 4);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_charge_consumed_by_attack() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 6, 6, 3, 4, 1, 1]);
        board.charge(0).unwrap();
        board.charge(0).unwrap();

        let player = &board.players()[0];
        assert_eq!(player.charge(), 7);
        assert_eq!(player.charged_cards().len(), 2);

        board.attack(0, 1).unwrap();
        assert_eq!(board.players()[0].charge(), 0);
        // 1 + 7 against a shield of 12
        assert_eq!(board.players()[1].shield(), 4);
    }

    #[test]
    fn test_swap_replaces_one_card() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 3, 5, 12, 1]);

        let events = board.swap(0, 1, 0).unwrap();

        let target = &board.players()[1];
        assert_eq!(target.shield(), 17);
        assert_eq!(board.deck().discard_pile()[0].rank(), 3);
        assert!(matches!(
            &events[0],
            GameEvent::Swapped { index: 0, shield: 17, removed, added, .. }
                if removed.rank() == 3 && added.rank() == 12
        ));
        assert_eq!(board.cards_in_play(), board.total_cards());
    }

    #[test]
    fn test_invalid_selection_leaves_board_untouched() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 3, 5, 12, 1]);

        assert!(matches!(board.swap(0, 1, 2), Err(ShieldError::InvalidSelection { .. })));
        assert!(matches!(board.attack(0, 5), Err(ShieldError::InvalidSelection { .. })));
        assert!(matches!(board.charge(2), Err(ShieldError::InvalidSelection { .. })));

        assert_eq!(board.deck().len(), 2);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_attack_on_self_refused_by_default() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 3, 5, 12, 1]);

        let err = board.attack(1, 1).unwrap_err();
        assert!(matches!(err, ShieldError::InvalidSelection { what: "target (self)", index: 1, .. }));
        assert_eq!(board.deck().len(), 2);
        assert_eq!(board.players()[1].shield(), 8);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_attack_on_self_when_allowed() {
        let mut board = BoardBuilder::new()
            .players(["a", "b"])
            .deck(stacked(&[10, 4, 4, 10, 3, 5, 6, 1]))
            .config(ShieldConfig::deterministic().with_self_attack(true))
            .build(1)
            .unwrap();

        board.attack(1, 1).unwrap();
        assert_eq!(board.players()[1].shield(), 2);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 4, 4, 3, 1]);
        let mut input = ScriptedInput::new([
            Choice::Action(ActionKind::Custom),
            Choice::Action(ActionKind::Attack),
            Choice::Player(0),
            Choice::Player(9),
            Choice::Player(1),
        ]);
        let mut log = EventLog::new();

        board.play_turn(&mut input, &mut log).unwrap();

        let rejected = log
            .filter(|e| matches!(e, GameEvent::SelectionRejected { .. }))
            .count();
        assert_eq!(rejected, 3);
        assert_eq!(input.remaining(), 0);
        assert_eq!(board.turn(), 1);
        assert_eq!(board.history().len(), 1);
        assert_eq!(board.players()[1].shield(), 5);
    }

    #[test]
    fn test_self_swap_with_bad_card_index() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 3, 5, 12, 1]);
        let mut input = ScriptedInput::new([
            Choice::Action(ActionKind::Swap),
            Choice::Player(0),
            Choice::ShieldCard(5),
            Choice::ShieldCard(1),
        ]);
        let mut log = EventLog::new();

        board.play_turn(&mut input, &mut log).unwrap();

        assert_eq!(board.players()[0].shield(), 16);
        let record = &board.history()[0];
        assert_eq!(record.action, ActionKind::Swap);
        assert_eq!(record.target, Some(PlayerId::new(0)));
    }

    #[test]
    fn test_self_attack_when_allowed() {
        let mut board = BoardBuilder::new()
            .players(["a", "b"])
            .deck(stacked(&[10, 4, 4, 10, 4, 4, 3, 1]))
            .config(ShieldConfig::deterministic().with_self_attack(true))
            .build(1)
            .unwrap();
        let mut input = ScriptedInput::new([Choice::Action(ActionKind::Attack), Choice::Player(0)]);

        board.play_turn(&mut input, &mut NullDisplay).unwrap();

        assert_eq!(board.players()[0].shield(), 5);
    }

    #[test]
    fn test_eliminating_player_after_cursor() {
        let mut ranks = vec![10, 4, 4, 10, 4, 4, 10, 4, 4, 1, 1, 1, 3, 5];
        ranks.extend([2; 10]);
        let mut board = board(&["a", "b", "c", "d"], &ranks);
        let mut input = ScriptedInput::new([
            Choice::Action(ActionKind::Charge),
            Choice::Action(ActionKind::Attack),
            Choice::Player(3),
            Choice::Action(ActionKind::Charge),
            Choice::Action(ActionKind::Charge),
            Choice::Action(ActionKind::Charge),
        ]);
        let mut log = EventLog::new();

        board.play_turn(&mut input, &mut log).unwrap();
        board.play_turn(&mut input, &mut log).unwrap();

        assert_eq!(board.players().len(), 3);
        assert_eq!(board.eliminated()[0].name(), "D");
        assert_eq!(board.next_player().map(Player::name), Some("C"));

        for _ in 0..3 {
            board.play_turn(&mut input, &mut log).unwrap();
        }
        assert_eq!(turn_order(&log), vec![0, 1, 2, 0, 1]);
        assert_eq!(board.cards_in_play(), board.total_cards());
    }

    #[test]
    fn test_eliminating_player_before_cursor() {
        let mut ranks = vec![1, 1, 1, 10, 4, 4, 10, 4, 4, 10, 4, 4, 3, 5];
        ranks.extend([2; 10]);
        let mut board = board(&["a", "b", "c", "d"], &ranks);
        let mut input = ScriptedInput::new([
            Choice::Action(ActionKind::Charge),
            Choice::Action(ActionKind::Attack),
            Choice::Player(0),
            Choice::Action(ActionKind::Charge),
            Choice::Action(ActionKind::Charge),
            Choice::Action(ActionKind::Charge),
        ]);
        let mut log = EventLog::new();

        for _ in 0..5 {
            board.play_turn(&mut input, &mut log).unwrap();
        }

        assert_eq!(turn_order(&log), vec![0, 1, 2, 3, 1]);
        let eliminated = &board.eliminated()[0];
        assert_eq!(eliminated.name(), "A");
        assert_eq!(eliminated.held_cards(), 1);
        assert!(eliminated.life_card().is_some());
        assert_eq!(board.cards_in_play(), board.total_cards());
    }

    #[test]
    fn test_last_player_wins() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 1, 1, 1, 9, 2, 2]);
        let mut input = ScriptedInput::new([Choice::Action(ActionKind::Attack), Choice::Player(1)]);
        let mut log = EventLog::new();

        let result = board.run(&mut input, &mut log).unwrap();

        assert_eq!(result.name, "A");
        assert_eq!(result.winner, PlayerId::new(0));
        assert_eq!(result.turns, 1);
        assert!(matches!(log.events().last(), Some(GameEvent::Winner { name, .. }) if name == "A"));
        assert!(matches!(
            board.play_turn(&mut input, &mut log),
            Err(ShieldError::GameOver)
        ));
    }

    #[test]
    fn test_single_player_wins_immediately() {
        let mut board = Board::new(["solo"], 3).unwrap();
        let mut input = ScriptedInput::default();
        let mut log = EventLog::new();

        let result = board.run(&mut input, &mut log).unwrap();
        assert_eq!(result.name, "Solo");
        assert_eq!(result.turns, 0);
        assert_eq!(log.events().len(), 1);
    }

    #[test]
    fn test_charging_keeps_cards_in_circulation() {
        // One spare card: every draw after the first recycles it
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 4, 4, 3]);
        let mut input = RandomInput::with_actions(GameRng::new(1), &[ActionKind::Charge]);

        for _ in 0..300 {
            board.play_turn(&mut input, &mut NullDisplay).unwrap();
            assert_eq!(board.cards_in_play(), board.total_cards());
        }

        assert_eq!(board.players()[0].charge(), 450);
        assert_eq!(board.players()[0].charged_cards().len(), 150);
        assert_eq!(board.deck().total_len(), 1);
    }

    #[test]
    fn test_closed_input_aborts() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 4, 4, 1]);
        let mut input = ScriptedInput::default();

        let result = board.run(&mut input, &mut NullDisplay);
        assert!(matches!(result, Err(ShieldError::InputClosed)));
    }

    #[test]
    fn test_mismatched_script_aborts() {
        let mut board = board(&["a", "b"], &[10, 4, 4, 10, 4, 4, 1]);
        let mut input = ScriptedInput::new([Choice::Player(1)]);

        let result = board.run(&mut input, &mut NullDisplay);
        assert!(matches!(result, Err(ShieldError::UnexpectedAnswer { asked: "action", .. })));
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_turn_limit() {
        let mut board = BoardBuilder::new()
            .players(["a", "b"])
            .config(ShieldConfig::default().with_max_turns(3))
            .build(5)
            .unwrap();
        let mut input = RandomInput::with_actions(GameRng::new(5), &[ActionKind::Swap]);

        let result = board.run(&mut input, &mut NullDisplay);
        assert!(matches!(result, Err(ShieldError::TurnLimitReached(3))));
        assert_eq!(board.turn(), 3);
    }

    #[test]
    fn test_random_game_to_completion() {
        let mut board = Board::new(["lucas", "julie", "baptiste", "alan"], 42).unwrap();
        let mut input = RandomInput::new(GameRng::new(42).fork());
        let mut log = EventLog::new();

        let result = board.run(&mut input, &mut log).unwrap();

        assert_eq!(board.players().len(), 1);
        assert_eq!(board.eliminated().len(), 3);
        assert_eq!(board.players()[0].id(), result.winner);
        assert_eq!(board.cards_in_play(), 52);
        assert_eq!(board.history().len(), result.turns as usize);
    }
}
