//! Port traits defining external boundaries.
//!
//! The linker and the interactive flow only talk to the outside world
//! through these traits. Implementations live in `src/adapters/`.

pub mod console;
pub mod filesystem;

pub use console::Console;
pub use filesystem::FileSystem;
