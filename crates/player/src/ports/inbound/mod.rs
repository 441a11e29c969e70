//! Inbound ports - entry points the session exposes to gesture sources.

pub mod drag_coordinator;

pub use drag_coordinator::DragCoordinator;
