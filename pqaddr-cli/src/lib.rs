//! pqaddr CLI
//!
//! Command implementations and terminal helpers behind the `pqaddr` binary.

pub mod commands;
pub mod ui;
