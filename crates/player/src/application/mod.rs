//! Application layer - the lineup editing session and its use cases.

pub mod error;
pub mod services;

pub use error::SaveError;
