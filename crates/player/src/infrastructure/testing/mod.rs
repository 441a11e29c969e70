//! Test-only infrastructure fakes.
//!
//! These helpers implement outbound ports for unit tests, recording what the
//! session asked for so tests can assert on it without a real display,
//! storage file or server.

pub mod fixtures;
pub mod recording_ports;

pub use recording_ports::{
    ManualClock, MemoryStorage, RecordingBindings, RecordingNotifier, RecordingRenderer,
};
