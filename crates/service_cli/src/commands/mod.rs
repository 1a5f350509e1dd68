//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod evaluate;
pub mod integrate;
pub mod sample;
pub mod time;
