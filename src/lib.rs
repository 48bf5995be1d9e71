// Library exports for menu-cli components

pub mod menu;
pub mod registry;
pub mod terminal;
pub mod testing;
pub mod utils;

// Re-export commonly used types
pub use menu::{parse_selection, run, MenuLoop, MenuOutcome, Selection};
pub use registry::{Choice, ChoiceRegistry, NO_SELECTION, REGISTRY};
pub use terminal::{Console, Key, TerminalConsole};
pub use utils::colors::MenuTheme;
pub use utils::error::{MenuError, MenuResult};
