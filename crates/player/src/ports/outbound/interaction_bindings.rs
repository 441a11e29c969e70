//! Interaction Bindings Port - gesture handler wiring
//!
//! Adapters hook drag or tap handlers onto whatever surface shows the lineup.
//! Calls are sequenced by `ModeController`; adapters never decide the mode.

use lineup_domain::InteractionMode;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait InteractionBindings: Send + Sync {
    /// Install the handlers for `mode`.
    fn attach(&self, mode: InteractionMode);

    /// Remove the handlers previously installed for `mode`.
    fn detach(&self, mode: InteractionMode);
}
