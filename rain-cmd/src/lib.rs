//! Command implementation for the rainfall CLI.
//!
//! One run loads a precipitation CSV, derives the monthly aggregates,
//! and renders the full chart set into an output directory.

pub mod report;
pub mod table;
