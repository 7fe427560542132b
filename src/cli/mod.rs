//! Command-line layer — input parsing and command implementations.
//!
//! Everything here is boundary glue: the core never sees raw text.

pub mod commands;
pub mod input;
