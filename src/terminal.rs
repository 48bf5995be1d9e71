//! Console seam between the menu loop and the real terminal
//!
//! [`Console`] is the small set of operations the menu needs. [`TerminalConsole`]
//! implements it on stdin/stdout with crossterm; tests use the scripted
//! console in [`crate::testing`] or a mockall mock instead.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};

/// A single keystroke as the menu sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    /// Ctrl+C while a key read is pending. Raw mode turns it into a keystroke
    /// instead of SIGINT; the menu ends with `MenuOutcome::Interrupted`.
    Interrupt,
    Other,
}

/// Line/key input and text output used by the menu loop
pub trait Console {
    /// Write text without a trailing newline and flush it
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write text followed by a newline
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;

    /// Read one line, without its line terminator. `None` once input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Read one keystroke. `None` once input is closed.
    ///
    /// Ctrl+C is reported as [`Key::Interrupt`], not as closed input.
    fn read_key(&mut self) -> io::Result<Option<Key>>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        (**self).read_key()
    }
}

/// Restores cooked mode when dropped, including on unwind
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Console backed by the process stdin/stdout
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    /// Whether keystrokes are read in raw mode (stdin is a terminal)
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn read_raw_key(&mut self) -> io::Result<Option<Key>> {
        let _guard = RawModeGuard::enable()?;

        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }

                let key = match key_event.code {
                    // raw mode swallows the signal, so honor it here
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        Key::Interrupt
                    }
                    KeyCode::Char(c) => Key::Char(c),
                    KeyCode::Enter => Key::Enter,
                    _ => Key::Other,
                };
                return Ok(Some(key));
            }
        }
    }

    fn read_piped_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.read_line()?.map(|line| key_from_line(&line)))
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(line)))
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        if self.interactive {
            let key = self.read_raw_key()?;
            if matches!(key, None | Some(Key::Interrupt)) {
                // keep the next output off the raw-mode line
                self.write_line("")?;
            }
            Ok(key)
        } else {
            self.read_piped_key()
        }
    }
}

/// Key for a line of piped input: its first character, or Enter when empty
pub fn key_from_line(line: &str) -> Key {
    line.chars().next().map(Key::Char).unwrap_or(Key::Enter)
}

fn trim_line_ending(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_line_takes_first_char() {
        assert_eq!(key_from_line("y"), Key::Char('y'));
        assert_eq!(key_from_line("No thanks"), Key::Char('N'));
    }

    #[test]
    fn test_key_from_empty_line_is_enter() {
        assert_eq!(key_from_line(""), Key::Enter);
    }

    #[test]
    fn test_trim_line_ending_handles_crlf() {
        assert_eq!(trim_line_ending("2\r\n".to_string()), "2");
        assert_eq!(trim_line_ending("2\n".to_string()), "2");
        assert_eq!(trim_line_ending(" 2 ".to_string()), " 2 ");
    }
}
