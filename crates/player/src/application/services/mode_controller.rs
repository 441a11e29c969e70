//! Mode controller - decides which gesture modality is wired.
//!
//! The controller owns the "handlers are wired" flag, so attaching twice or
//! detaching when nothing is wired is a no-op. It never touches assignment
//! rules.

use std::sync::Arc;

use lineup_domain::{InteractionMode, DEFAULT_MOBILE_BREAKPOINT};

use crate::ports::outbound::InteractionBindings;

pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// A different modality is now wired (`from == None` on first wiring).
    Switched {
        from: Option<InteractionMode>,
        to: InteractionMode,
    },
    /// Same modality; handlers were re-bound only.
    Rebound(InteractionMode),
    /// Nothing wired because the lineup is read-only.
    Disabled,
}

pub struct ModeController {
    bindings: Arc<dyn InteractionBindings>,
    breakpoint: u32,
    wired: Option<InteractionMode>,
}

impl ModeController {
    pub fn new(bindings: Arc<dyn InteractionBindings>, breakpoint: u32) -> Self {
        Self {
            bindings,
            breakpoint,
            wired: None,
        }
    }

    pub fn with_default_breakpoint(bindings: Arc<dyn InteractionBindings>) -> Self {
        Self::new(bindings, DEFAULT_MOBILE_BREAKPOINT)
    }

    /// Currently wired modality.
    pub fn current(&self) -> Option<InteractionMode> {
        self.wired
    }

    pub fn mode_for(&self, width: u32) -> InteractionMode {
        InteractionMode::for_width(width, self.breakpoint)
    }

    /// Wire `mode`, replacing any other wired modality. Returns false when
    /// `mode` was already wired.
    pub fn attach(&mut self, mode: InteractionMode) -> bool {
        match self.wired {
            Some(current) if current == mode => return false,
            Some(_) => {
                self.detach();
            }
            None => {}
        }
        self.bindings.attach(mode);
        self.wired = Some(mode);
        tracing::debug!(%mode, "Interaction handlers attached");
        true
    }

    /// Unwire whatever is wired.
    pub fn detach(&mut self) -> Option<InteractionMode> {
        let mode = self.wired.take()?;
        self.bindings.detach(mode);
        tracing::debug!(%mode, "Interaction handlers detached");
        Some(mode)
    }

    /// Re-evaluate the modality for a viewport width.
    ///
    /// On a switch the old handlers are removed, `on_switch` runs (the session
    /// resets its interaction state and re-renders there), then the new
    /// handlers are attached. Without a switch the handlers are only re-bound.
    pub fn apply_width(
        &mut self,
        width: u32,
        on_switch: impl FnOnce(Option<InteractionMode>, InteractionMode),
    ) -> ModeChange {
        let target = self.mode_for(width);

        if self.wired == Some(target) {
            self.bindings.detach(target);
            self.bindings.attach(target);
            return ModeChange::Rebound(target);
        }

        let from = self.detach();
        on_switch(from, target);
        self.attach(target);
        tracing::info!(width, from = ?from, to = %target, "Interaction mode switched");
        ModeChange::Switched { from, to: target }
    }
}

/// Trailing-edge debounce of viewport widths.
///
/// Timestamps are supplied by the caller in milliseconds, so the debouncer
/// itself never reads a clock.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<PendingResize>,
}

#[derive(Debug, Clone, Copy)]
struct PendingResize {
    width: u32,
    deadline_ms: u64,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE_MS)
    }
}

impl ResizeDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Record a resize; the latest width wins and the deadline restarts.
    pub fn record(&mut self, width: u32, now_ms: u64) {
        self.pending = Some(PendingResize {
            width,
            deadline_ms: now_ms.saturating_add(self.delay_ms),
        });
    }

    /// The settled width, once, after the quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<u32> {
        match self.pending {
            Some(pending) if now_ms >= pending.deadline_ms => {
                self.pending = None;
                Some(pending.width)
            }
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.map(|p| p.deadline_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockInteractionBindings;
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[test]
    fn first_width_attaches_without_detach() {
        let mut bindings = MockInteractionBindings::new();
        bindings.expect_detach().times(0);
        bindings
            .expect_attach()
            .with(eq(InteractionMode::Tap))
            .times(1)
            .return_const(());
        let mut controller = ModeController::with_default_breakpoint(Arc::new(bindings));

        let mut switched = None;
        let change = controller.apply_width(800, |from, to| switched = Some((from, to)));

        assert_eq!(
            change,
            ModeChange::Switched {
                from: None,
                to: InteractionMode::Tap
            }
        );
        assert_eq!(switched, Some((None, InteractionMode::Tap)));
        assert_eq!(controller.current(), Some(InteractionMode::Tap));
    }

    #[test]
    fn crossing_the_breakpoint_detaches_then_attaches() {
        let mut seq = Sequence::new();
        let mut bindings = MockInteractionBindings::new();
        bindings
            .expect_attach()
            .with(eq(InteractionMode::Drag))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        bindings
            .expect_detach()
            .with(eq(InteractionMode::Drag))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        bindings
            .expect_attach()
            .with(eq(InteractionMode::Tap))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let mut controller = ModeController::with_default_breakpoint(Arc::new(bindings));

        controller.apply_width(1600, |_, _| {});
        let change = controller.apply_width(1000, |_, _| {});

        assert_eq!(
            change,
            ModeChange::Switched {
                from: Some(InteractionMode::Drag),
                to: InteractionMode::Tap
            }
        );
    }

    #[test]
    fn same_mode_only_rebinds() {
        let mut bindings = MockInteractionBindings::new();
        bindings.expect_attach().times(2).return_const(());
        bindings.expect_detach().times(1).return_const(());
        let mut controller = ModeController::with_default_breakpoint(Arc::new(bindings));

        controller.apply_width(1400, |_, _| {});
        let mut called = false;
        let change = controller.apply_width(1900, |_, _| called = true);

        assert_eq!(change, ModeChange::Rebound(InteractionMode::Drag));
        assert!(!called);
    }

    #[test]
    fn attach_and_detach_are_idempotent() {
        let mut bindings = MockInteractionBindings::new();
        bindings.expect_attach().times(1).return_const(());
        bindings.expect_detach().times(1).return_const(());
        let mut controller = ModeController::new(Arc::new(bindings), 1000);

        assert!(controller.attach(InteractionMode::Tap));
        assert!(!controller.attach(InteractionMode::Tap));
        assert_eq!(controller.detach(), Some(InteractionMode::Tap));
        assert_eq!(controller.detach(), None);
    }

    #[test]
    fn debouncer_fires_once_with_latest_width() {
        let mut debouncer = ResizeDebouncer::default();

        debouncer.record(1000, 0);
        debouncer.record(1300, 150);
        assert_eq!(debouncer.poll(300), None);
        assert_eq!(debouncer.deadline(), Some(350));
        assert_eq!(debouncer.poll(350), Some(1300));
        assert_eq!(debouncer.poll(400), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
