//! Lineup Player crate.
//!
//! The editing session for one team's lineup, the ports it talks through,
//! native adapters and a headless runner that replays gesture scripts.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;

pub use application::services::{LineupSession, LineupSnapshot, SessionPorts, SessionSettings};
pub use application::SaveError;
