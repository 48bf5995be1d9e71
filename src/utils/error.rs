//! Error handling for menu-cli
//!
//! Library code returns [`MenuError`] through [`MenuResult`]; the binary
//! converts into `anyhow::Error` and adds context there. Invalid user input is
//! never an error: the menu loop recovers from it by re-prompting.

use thiserror::Error;

/// Failures of the console the menu is driven through
#[derive(Error, Debug)]
pub enum MenuError {
    /// Reading from or writing to the console failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;
