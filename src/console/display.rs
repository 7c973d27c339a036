//! Plain-text rendering of game events.

use std::fmt::Write as _;
use std::io::Write;

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::core::PlayerId;
use crate::game::{DisplaySink, GameEvent, PlayerStatus};

/// Writes one block of text per event.
///
/// Names are learned from the roster shown at the start of every turn.
#[derive(Debug)]
pub struct ConsoleDisplay<W> {
    output: W,
    names: FxHashMap<PlayerId, String>,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            names: FxHashMap::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn name(&self, id: PlayerId) -> String {
        self.names.get(&id).cloned().unwrap_or_else(|| id.to_string())
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            warn!(%err, "failed to write game output");
        }
    }

    fn render(&self, event: &GameEvent) -> String {
        match event {
            GameEvent::Roster { players, .. } => {
                let mut text = String::new();
                for status in players {
                    text.push_str(&status_block(status));
                }
                text.truncate(text.trim_end().len());
                text
            }
            GameEvent::TurnStarted { turn, player } => {
                format!("=== Turn {turn}: {} ===", self.name(*player))
            }
            GameEvent::SelectionRejected { reason, .. } => format!("Invalid choice ({reason}), try again."),
            GameEvent::ActionChosen { player, action } => format!("{} chooses {action}", self.name(*player)),
            GameEvent::Attacked {
                attacker,
                target,
                card,
                charge,
                value,
                shield_before,
                shield_after,
                life_lost,
                life_after,
            } => {
                let target_name = self.name(*target);
                let mut text = format!(
                    "{} attacks {target_name} with {card} + {charge} charge = {value}",
                    self.name(*attacker)
                );
                if *shield_after > 0 {
                    let _ = write!(text, "\n{target_name}'s shield holds: {shield_before} -> {shield_after}");
                } else {
                    let _ = write!(
                        text,
                        "\n{target_name}'s shield breaks! {target_name} loses {life_lost} life ({life_after} left)"
                    );
                }
                text
            }
            GameEvent::ShieldRedealt { player, shield } => {
                format!("{} raises a new shield worth {shield}", self.name(*player))
            }
            GameEvent::Charged {
                player,
                card,
                charge,
                charged_cards,
            } => format!(
                "{} charges {card} (charge {charge} over {charged_cards} cards)",
                self.name(*player)
            ),
            GameEvent::Swapped {
                initiator,
                target,
                removed,
                added,
                shield,
                ..
            } => format!(
                "{} swaps {}'s {removed} for {added} (shield {shield})",
                self.name(*initiator),
                self.name(*target)
            ),
            GameEvent::Eliminated { name, .. } => format!("{name} is eliminated!"),
            GameEvent::Winner { name, .. } => format!("Winner: {name}"),
        }
    }
}

/// Roster entry in the classic layout.
fn status_block(status: &PlayerStatus) -> String {
    let life_card = status
        .life_card
        .as_ref()
        .map_or_else(|| "-".to_owned(), ToString::to_string);
    let shield_cards: Vec<String> = status.shield_cards.iter().map(ToString::to_string).collect();
    format!(
        "Player Name : {}\n\tLife : {} - {}\n\tShield : [ {} ] -> [{}]\n\tCharged Attacks: {}\n{}\n",
        status.name,
        status.life,
        life_card,
        status.shield,
        shield_cards.join(", "),
        status.charged_cards,
        "-".repeat(10)
    )
}

impl<W: Write> DisplaySink for ConsoleDisplay<W> {
    fn show(&mut self, event: &GameEvent) {
        if let GameEvent::Roster { players, .. } = event {
            for status in players {
                self.names.insert(status.id, status.name.clone());
            }
        }
        let text = self.render(event);
        self.emit(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn status(id: u8, name: &str) -> PlayerStatus {
        PlayerStatus {
            id: PlayerId::new(id),
            name: name.to_owned(),
            life: 10,
            life_card: Some(Card::new(10, Suit::Hearts)),
            shield: 8,
            shield_cards: vec![Card::new(4, Suit::Spades), Card::new(4, Suit::Clubs)],
            charge: 0,
            charged_cards: 0,
        }
    }

    fn shown(events: &[GameEvent]) -> String {
        let mut display = ConsoleDisplay::new(Vec::new());
        for event in events {
            display.show(event);
        }
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_roster_layout() {
        let text = shown(&[GameEvent::Roster {
            turn: 1,
            players: vec![status(0, "Lucas")],
        }]);

        assert_eq!(
            text,
            "Player Name : Lucas\n\tLife : 10 - 10 ♥\n\tShield : [ 8 ] -> [4 ♠, 4 ♣]\n\tCharged Attacks: 0\n----------\n"
        );
    }

    #[test]
    fn test_names_learned_from_roster() {
        let text = shown(&[
            GameEvent::Roster {
                turn: 1,
                players: vec![status(0, "Lucas"), status(1, "Julie")],
            },
            GameEvent::Attacked {
                attacker: PlayerId::new(0),
                target: PlayerId::new(1),
                card: Card::new(5, Suit::Diamonds),
                charge: 2,
                value: 7,
                shield_before: 4,
                shield_after: 0,
                life_lost: 3,
                life_after: 7,
            },
        ]);

        assert!(text.contains("Lucas attacks Julie with 5 ♦ + 2 charge = 7"));
        assert!(text.contains("Julie's shield breaks! Julie loses 3 life (7 left)"));
    }

    #[test]
    fn test_unknown_player_falls_back_to_seat() {
        let text = shown(&[GameEvent::ShieldRedealt {
            player: PlayerId::new(4),
            shield: 12,
        }]);
        assert_eq!(text, "Player 4 raises a new shield worth 12\n");
    }

    #[test]
    fn test_winner_line() {
        let text = shown(&[GameEvent::Winner {
            player: PlayerId::new(2),
            name: "Morgane".to_owned(),
        }]);
        assert_eq!(text.lines().last(), Some("Winner: Morgane"));
    }
}
