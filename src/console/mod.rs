//! Terminal collaborators for the `shield` binary.

pub mod display;
pub mod input;

pub use display::ConsoleDisplay;
pub use input::ConsoleInput;

/// Table used when no names are given on the command line.
pub const DEFAULT_NAMES: [&str; 7] = ["lucas", "julie", "baptiste", "alan", "olivier", "morgane", "francois"];
