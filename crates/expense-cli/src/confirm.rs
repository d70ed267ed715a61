//! Yes/no confirmation for destructive commands.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Source of a yes/no decision.
pub trait Confirm {
    /// Ask `prompt`; `true` only for an explicit yes.
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;
}

/// Reads a single keypress from the terminal.
///
/// When stdin is not a terminal (piped input), the first character of the
/// first line is used instead.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{} (y/n) ", prompt)?;
        stdout.flush()?;

        let key = if io::stdin().is_terminal() {
            read_key()?
        } else {
            read_piped_key()?
        };
        writeln!(stdout)?;

        tracing::debug!(?key, "confirmation answer");
        Ok(is_yes(key))
    }
}

/// A fixed answer, for scripted use and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _prompt: &str) -> anyhow::Result<bool> {
        Ok(self.0)
    }
}

fn is_yes(key: Option<char>) -> bool {
    matches!(key, Some('y' | 'Y'))
}

fn read_key() -> anyhow::Result<Option<char>> {
    enable_raw_mode()?;
    let result = wait_for_key_press();
    disable_raw_mode()?;
    Ok(result?)
}

fn wait_for_key_press() -> io::Result<Option<char>> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(match key.code {
                KeyCode::Char(c) => Some(c),
                _ => None,
            });
        }
    }
}

fn read_piped_key() -> anyhow::Result<Option<char>> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.chars().next())
}
