//! High-level operations — the two-coloring check.

pub mod checker;

pub use checker::{check, CheckOutcome};
