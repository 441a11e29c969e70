//! Lineup Shared - wire contracts for the lineup editor
//!
//! This crate contains the JSON shapes exchanged with the server:
//! - Initial page data (roster, formation, current assignments)
//! - Save request and response bodies
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde, serde_json and the domain vocabulary
//! 2. **No business logic** - pure data types plus conversions to domain types
//! 3. **Lenient input** - ids may arrive as numbers or strings

pub mod initial_data;
pub mod requests;
pub mod responses;

pub use initial_data::{InitialLineupData, PlayerData, PlayerTable, WireId};
pub use requests::SaveLineupRequest;
pub use responses::{LineupData, PlayerRef, SaveLineupResponse, SUCCESS_STATUS};
