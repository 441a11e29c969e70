//! Ports - the seams between the editing session and the outside world.
//!
//! - `inbound`: driven by gesture sources (drag wiring)
//! - `outbound`: implemented by infrastructure adapters

pub mod inbound;
pub mod outbound;
