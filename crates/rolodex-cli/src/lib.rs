//! Rolodex CLI library.
//!
//! This crate provides the command-line interface, one-shot subcommands, and
//! the interactive REPL for the Rolodex contact directory.

pub mod cli;
pub mod commands;
pub mod render;
pub mod repl;
