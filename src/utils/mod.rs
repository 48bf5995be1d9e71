//! Utility modules for menu-cli
//!
//! Error types, logging and color styling shared by the menu and the binary.

pub mod colors;
pub mod error;
pub mod logger;
