//! Ready-made collaborators.
//!
//! - `ScriptedInput`: answers from a fixed list, for deterministic tests
//! - `RandomInput`: uniformly random answers, for simulations and `--auto`
//! - `EventLog`: display that records every event

use std::collections::VecDeque;

use super::collaborator::{DisplaySink, InputProvider};
use super::event::GameEvent;
use crate::core::{ActionKind, GameRng, Player, Result, ShieldError};

// =============================================================================
// Scripted Input
// =============================================================================

/// One scripted answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Action(ActionKind),
    Player(usize),
    ShieldCard(usize),
}

/// Replays a fixed sequence of answers.
///
/// Returns `ShieldError::InputClosed` once the script runs out, and
/// `ShieldError::UnexpectedAnswer` when the next answer is for a different
/// question. Neither is recoverable, so a wrong script ends the game.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    choices: VecDeque<Choice>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    pub fn push(&mut self, choice: Choice) {
        self.choices.push_back(choice);
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }

    fn next(&mut self, asked: &'static str) -> Result<Choice> {
        let choice = self.choices.pop_front().ok_or(ShieldError::InputClosed)?;
        tracing::trace!(?choice, asked, "scripted answer");
        Ok(choice)
    }
}

fn mismatch<T>(asked: &'static str, found: Choice) -> Result<T> {
    Err(ShieldError::UnexpectedAnswer {
        asked,
        found: format!("{found:?}"),
    })
}

impl InputProvider for ScriptedInput {
    fn choose_action(&mut self, _current: &Player) -> Result<ActionKind> {
        match self.next("action")? {
            Choice::Action(action) => Ok(action),
            other => mismatch("action", other),
        }
    }

    fn choose_player(&mut self, _current: &Player, _roster: &[Player], _include_self: bool) -> Result<usize> {
        match self.next("player")? {
            Choice::Player(index) => Ok(index),
            other => mismatch("player", other),
        }
    }

    fn choose_shield_card(&mut self, _chooser: &Player, _target: &Player) -> Result<usize> {
        match self.next("shield card")? {
            Choice::ShieldCard(index) => Ok(index),
            other => mismatch("shield card", other),
        }
    }
}

// =============================================================================
// Random Input
// =============================================================================

/// Picks uniformly among valid answers.
#[derive(Clone, Debug)]
pub struct RandomInput {
    rng: GameRng,
    actions: Vec<ActionKind>,
}

impl RandomInput {
    /// Chooses among all supported actions.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_actions(rng, &[ActionKind::Attack, ActionKind::Charge, ActionKind::Swap])
    }

    /// Chooses only among `actions`.
    ///
    /// Panics if `actions` is empty.
    #[must_use]
    pub fn with_actions(rng: GameRng, actions: &[ActionKind]) -> Self {
        assert!(!actions.is_empty(), "RandomInput needs at least one action");
        Self {
            rng,
            actions: actions.to_vec(),
        }
    }
}

impl InputProvider for RandomInput {
    fn choose_action(&mut self, _current: &Player) -> Result<ActionKind> {
        self.rng.choose(&self.actions).copied().ok_or(ShieldError::InputClosed)
    }

    fn choose_player(&mut self, current: &Player, roster: &[Player], include_self: bool) -> Result<usize> {
        let candidates: Vec<usize> = roster
            .iter()
            .enumerate()
            .filter(|(_, p)| include_self || p.id() != current.id())
            .map(|(i, _)| i)
            .collect();
        self.rng.choose(&candidates).copied().ok_or(ShieldError::InputClosed)
    }

    fn choose_shield_card(&mut self, _chooser: &Player, target: &Player) -> Result<usize> {
        let len = target.shield_cards().len();
        if len == 0 {
            return Err(ShieldError::InputClosed);
        }
        Ok(self.rng.gen_range_usize(0..len))
    }
}

// =============================================================================
// Event Log
// =============================================================================

/// Display that keeps every event it is shown.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Events matching a predicate.
    pub fn filter<'a>(&'a self, pred: impl Fn(&GameEvent) -> bool + 'a) -> impl Iterator<Item = &'a GameEvent> + 'a {
        self.events.iter().filter(move |e| pred(e))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DisplaySink for EventLog {
    fn show(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
