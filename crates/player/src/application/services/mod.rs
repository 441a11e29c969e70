//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations.

pub mod lineup_session;
pub mod mode_controller;
pub mod persistence;

pub use lineup_session::{LineupSession, LineupSnapshot, SessionPorts, SessionSettings};
pub use mode_controller::{ModeChange, ModeController, ResizeDebouncer, DEFAULT_RESIZE_DEBOUNCE_MS};
pub use persistence::{AuthoritativeLineup, LineupPersistence, SaveTarget};
