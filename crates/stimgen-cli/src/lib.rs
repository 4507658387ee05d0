//! stimgen CLI library.
//!
//! Command implementations live in [`commands`]; the `stimgen` binary
//! is a thin clap dispatcher over them.

pub mod commands;
