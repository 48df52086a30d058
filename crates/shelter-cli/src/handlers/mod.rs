//! Command handlers that delegate to `AppCore`.
//!
//! Handlers are thin wrappers that:
//! 1. Parse/validate CLI-specific input
//! 2. Call `AppCore` methods
//! 3. Format output for the terminal
//!
//! They never touch repositories or database connections directly.

pub mod add;
pub mod import;
pub mod list;
pub mod paths;
pub mod serve;
