//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the editing session to render, notify and persist without
//! depending on concrete implementations.

pub mod interaction_bindings;
pub mod lineup_api_port;
pub mod notification_port;
pub mod platform;
pub mod render_port;

pub use interaction_bindings::InteractionBindings;
pub use lineup_api_port::{ApiError, ApiResponse, LineupApiPort};
pub use notification_port::NotificationPort;
pub use platform::{storage_keys, ClockPort, StoragePort};
pub use render_port::{LineupView, PitchRowView, PitchSlotView, PlayerCard, RenderPort, SaveButtonState};

#[cfg(any(test, feature = "testing"))]
pub use interaction_bindings::MockInteractionBindings;
#[cfg(any(test, feature = "testing"))]
pub use lineup_api_port::MockLineupApiPort;
#[cfg(any(test, feature = "testing"))]
pub use notification_port::MockNotificationPort;
#[cfg(any(test, feature = "testing"))]
pub use platform::{MockClockPort, MockStoragePort};
#[cfg(any(test, feature = "testing"))]
pub use render_port::MockRenderPort;
