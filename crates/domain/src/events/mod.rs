//! Domain Events
//!
//! Return types from lineup mutations, communicating what happened when
//! state was modified so the session can re-render, mark the lineup dirty,
//! and pick the right notice.

pub mod assignment_events;

pub use assignment_events::*;
