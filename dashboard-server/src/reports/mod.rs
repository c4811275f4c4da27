//! Report Module
//!
//! Derives profit/loss summaries from events and their recorded
//! sessions. Reports are computed on demand and never stored.

pub mod calculator;
pub mod money;

pub use calculator::calculate_report;
