//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `codecommit-sign` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `codecommit_sign` library to perform the work.
//!
//! Commands write their result alone on stdout so it can be captured by
//! scripts; diagnostics go to stderr through the logger.

pub mod completions;
pub mod sign;
pub mod translate;
