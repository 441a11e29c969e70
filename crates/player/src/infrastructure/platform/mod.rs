//! Native implementations of the storage and clock ports.

mod desktop;

pub use desktop::{FileStorage, SystemClock};
