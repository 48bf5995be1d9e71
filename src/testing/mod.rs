//! Testing support shared by unit and integration tests

mod scripted_console;

pub use scripted_console::{ConsoleEvent, ScriptedConsole};
