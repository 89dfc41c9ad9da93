//! Pipeline entry points for announcer operations.

pub mod announce;

pub use announce::{RunSummary, run};
