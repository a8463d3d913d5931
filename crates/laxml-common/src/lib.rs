//! Common utilities for the laxml markup parser.
//!
//! This crate provides shared infrastructure used by the parser crates and the CLI:
//! - **Warning System** - colored terminal output for recovered parse problems
//! - **Source Loading** - reading markup from files or stdin

pub mod source;
pub mod warning;
