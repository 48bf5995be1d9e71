//! In-memory console with scripted input and recorded output

use std::collections::VecDeque;
use std::io;

use crate::terminal::{Console, Key};

/// One recorded output operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Write(String),
    Clear,
}

/// Console that replays queued lines/keys and records everything written.
///
/// Lines read are echoed into the output the way a terminal echoes typing,
/// so transcripts read like a real session. Keys are not echoed. Once a queue
/// runs dry the corresponding read reports closed input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    keys: VecDeque<Key>,
    events: Vec<ConsoleEvent>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a line for the next `read_line`
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push_back(line.to_string());
        self
    }

    /// Queue a character keystroke for the next `read_key`
    pub fn key(self, c: char) -> Self {
        self.key_press(Key::Char(c))
    }

    pub fn key_press(mut self, key: Key) -> Self {
        self.keys.push_back(key);
        self
    }

    pub fn events(&self) -> &[ConsoleEvent] {
        &self.events
    }

    /// All written text, ignoring clears
    pub fn output(&self) -> String {
        self.events
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Write(text) => Some(text.as_str()),
                ConsoleEvent::Clear => None,
            })
            .collect()
    }

    /// Written text split at each clear. The last entry is the current screen.
    pub fn screens(&self) -> Vec<String> {
        let mut screens = vec![String::new()];
        for event in &self.events {
            match event {
                ConsoleEvent::Write(text) => {
                    if let Some(screen) = screens.last_mut() {
                        screen.push_str(text);
                    }
                }
                ConsoleEvent::Clear => screens.push(String::new()),
            }
        }
        screens
    }

    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ConsoleEvent::Clear))
            .count()
    }

    /// True when every queued line and key has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.lines.is_empty() && self.keys.is_empty()
    }

    fn record(&mut self, text: String) {
        if let Some(ConsoleEvent::Write(last)) = self.events.last_mut() {
            last.push_str(&text);
        } else {
            self.events.push(ConsoleEvent::Write(text));
        }
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.record(text.to_string());
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.record(format!("{}\n", text));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.events.push(ConsoleEvent::Clear);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.lines.pop_front();
        if let Some(line) = &line {
            self.record(format!("{}\n", line));
        }
        Ok(line)
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.keys.pop_front())
    }
}
