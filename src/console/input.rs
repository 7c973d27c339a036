//! Line-based prompts.

use std::io::{BufRead, Write};

use crate::core::{ActionKind, Player, Result, ShieldError};
use crate::game::InputProvider;

/// Asks on `output`, reads one answer per line from `input`.
///
/// Answers are 1-based menu numbers. Anything that does not parse is
/// reported as an invalid selection, so the board simply asks again.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, what: &'static str, len: usize) -> Result<usize> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShieldError::InputClosed);
        }

        let invalid = |index| ShieldError::InvalidSelection { what, index, len };
        let number: usize = line.trim().parse().map_err(|_| invalid(0))?;
        number.checked_sub(1).ok_or_else(|| invalid(0))
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn choose_action(&mut self, current: &Player) -> Result<ActionKind> {
        writeln!(self.output, "{}, choose an action:", current.name())?;
        for (i, action) in ActionKind::ALL.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, action)?;
        }

        let len = ActionKind::ALL.len();
        let index = self.ask("action", len)?;
        ActionKind::from_index(index).ok_or(ShieldError::InvalidSelection {
            what: "action",
            index,
            len,
        })
    }

    fn choose_player(&mut self, current: &Player, roster: &[Player], include_self: bool) -> Result<usize> {
        writeln!(self.output, "{}, choose a player:", current.name())?;
        for (i, player) in roster.iter().enumerate() {
            if include_self || player.id() != current.id() {
                writeln!(self.output, "  {}) {}", i + 1, player)?;
            }
        }
        self.ask("player", roster.len())
    }

    fn choose_shield_card(&mut self, chooser: &Player, target: &Player) -> Result<usize> {
        writeln!(
            self.output,
            "{}, choose which of {}'s shield cards to replace:",
            chooser.name(),
            target.name()
        )?;
        for (i, card) in target.shield_cards().iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, card)?;
        }
        self.ask("shield card", target.shield_cards().len())
    }
}
