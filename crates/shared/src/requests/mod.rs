//! Request bodies sent to the server.

pub mod lineup;

pub use lineup::SaveLineupRequest;
