//! Interactive menu loop
//!
//! The loop is an explicit state machine:
//!
//! ```text
//! Prompting -> Dispatching -> Pausing -> Prompting
//!           \-> Rejecting  -> Pausing -> Prompting
//!                Dispatching(exit) -> Confirming -> Prompting | Terminated
//! ```
//!
//! Invalid input is never an error. The only ways out are a confirmed exit,
//! the input stream closing, or Ctrl+C at a key prompt.

use crate::registry::{Choice, ChoiceRegistry};
use crate::terminal::{Console, Key};
use crate::utils::colors::MenuTheme;
use crate::utils::error::MenuResult;

pub const HEADING: &str = "Please choose an action:";
pub const SELECTION_PROMPT: &str = "Enter your selection: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const PAUSE_PROMPT: &str = "Press any key to continue...";
pub const CONFIRM_EXIT_PROMPT: &str = "Are you sure you want to exit the application? (Y/N): ";
pub const FAREWELL: &str = "Exiting the application...";

/// How the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The user picked Exit and answered yes
    Exited,
    /// Input closed before an exit was confirmed
    InputClosed,
    /// Ctrl+C was pressed at a key prompt
    Interrupted,
}

/// Result of classifying a line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Valid(&'static Choice),
    /// Unparsable, out of range, or the reserved zero code
    Invalid,
}

/// Answer to the exit confirmation question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Unrecognized,
}

impl Confirmation {
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Char('y' | 'Y') => Confirmation::Yes,
            Key::Char('n' | 'N') => Confirmation::No,
            _ => Confirmation::Unrecognized,
        }
    }
}

/// Map raw input to a registered choice.
pub fn parse_selection(registry: &ChoiceRegistry, input: &str) -> Selection {
    match input.trim().parse::<i64>() {
        Ok(code) => registry
            .get(code)
            .map(Selection::Valid)
            .unwrap_or(Selection::Invalid),
        Err(_) => Selection::Invalid,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Prompting,
    Dispatching(&'static Choice),
    Rejecting,
    Pausing,
    Confirming,
    Terminated(MenuOutcome),
}

/// Menu loop bound to a registry and a console
pub struct MenuLoop<'a, C: Console> {
    registry: &'a ChoiceRegistry,
    console: C,
    theme: MenuTheme,
}

impl<'a, C: Console> MenuLoop<'a, C> {
    pub fn new(registry: &'a ChoiceRegistry, console: C) -> Self {
        Self {
            registry,
            console,
            theme: MenuTheme::plain(),
        }
    }

    pub fn with_theme(mut self, theme: MenuTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Run until the user confirms exit, input closes, or a key read is interrupted.
    pub fn run(mut self) -> MenuResult<MenuOutcome> {
        let mut state = MenuState::Prompting;

        loop {
            state = match state {
                MenuState::Prompting => self.prompt()?,
                MenuState::Dispatching(choice) => self.dispatch(choice)?,
                MenuState::Rejecting => self.reject()?,
                MenuState::Pausing => self.pause()?,
                MenuState::Confirming => self.confirm_exit()?,
                MenuState::Terminated(outcome) => {
                    tracing::info!(?outcome, "menu loop finished");
                    return Ok(outcome);
                }
            };
        }
    }

    /// Write the menu screen, including the trailing selection prompt.
    pub fn render(&mut self) -> MenuResult<()> {
        let heading = self.theme.heading.apply_to(HEADING).to_string();
        self.console.write_line(&heading)?;
        self.console.write_line("")?;

        for choice in self.registry.list_choices() {
            let code = self.theme.code.apply_to(format!("[{}]", choice.code));
            self.console
                .write_line(&format!("{}:\t{}", code, choice.label))?;
        }

        self.console.write_line("")?;
        let prompt = self.theme.prompt.apply_to(SELECTION_PROMPT).to_string();
        self.console.write(&prompt)?;
        Ok(())
    }

    fn prompt(&mut self) -> MenuResult<MenuState> {
        self.render()?;

        let Some(input) = self.console.read_line()? else {
            return Ok(MenuState::Terminated(MenuOutcome::InputClosed));
        };

        match parse_selection(self.registry, &input) {
            Selection::Valid(choice) => {
                tracing::debug!(code = choice.code, label = choice.label, "selection received");
                Ok(MenuState::Dispatching(choice))
            }
            Selection::Invalid => {
                tracing::debug!(input = %input, "invalid selection");
                Ok(MenuState::Rejecting)
            }
        }
    }

    fn dispatch(&mut self, choice: &'static Choice) -> MenuResult<MenuState> {
        if choice.is_exit {
            return Ok(MenuState::Confirming);
        }

        tracing::info!(code = choice.code, label = choice.label, "running menu action");
        let confirmation = format!("You chose to {}.", choice.label);
        let confirmation = self.theme.success.apply_to(confirmation).to_string();
        self.console.write_line(&confirmation)?;
        Ok(MenuState::Pausing)
    }

    fn reject(&mut self) -> MenuResult<MenuState> {
        let message = self.theme.error.apply_to(INVALID_CHOICE).to_string();
        self.console.write_line(&message)?;
        Ok(MenuState::Pausing)
    }

    fn pause(&mut self) -> MenuResult<MenuState> {
        self.console.write_line("")?;
        let hint = self.theme.hint.apply_to(PAUSE_PROMPT).to_string();
        self.console.write_line(&hint)?;

        if let Err(outcome) = self.next_key()? {
            return Ok(MenuState::Terminated(outcome));
        }

        self.console.clear()?;
        Ok(MenuState::Prompting)
    }

    /// Next keystroke, or the outcome that ends the loop in its place
    fn next_key(&mut self) -> MenuResult<Result<Key, MenuOutcome>> {
        match self.console.read_key()? {
            Some(Key::Interrupt) => Ok(Err(MenuOutcome::Interrupted)),
            Some(key) => Ok(Ok(key)),
            None => Ok(Err(MenuOutcome::InputClosed)),
        }
    }

    fn confirm_exit(&mut self) -> MenuResult<MenuState> {
        loop {
            let prompt = self.theme.prompt.apply_to(CONFIRM_EXIT_PROMPT).to_string();
            self.console.write(&prompt)?;

            let key = match self.next_key()? {
                Ok(key) => key,
                Err(outcome) => return Ok(MenuState::Terminated(outcome)),
            };
            if let Key::Char(c) = key {
                self.console.write(&c.to_string())?;
            }

            let answer = Confirmation::from_key(key);
            tracing::debug!(?key, ?answer, "exit confirmation answered");

            match answer {
                Confirmation::Yes => {
                    self.console.write_line("")?;
                    self.console.write_line("")?;
                    self.console.write_line(FAREWELL)?;
                    return Ok(MenuState::Terminated(MenuOutcome::Exited));
                }
                Confirmation::No => {
                    self.console.clear()?;
                    return Ok(MenuState::Prompting);
                }
                Confirmation::Unrecognized => {
                    self.console.write_line("")?;
                }
            }
        }
    }
}

/// Run the menu over `registry` with a plain theme.
pub fn run<C: Console>(registry: &ChoiceRegistry, console: C) -> MenuResult<MenuOutcome> {
    MenuLoop::new(registry, console).run()
}
