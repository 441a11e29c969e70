//! Recording implementations of the outbound ports.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use lineup_domain::{InteractionEffect, InteractionMode, Notice};

use crate::ports::outbound::{
    ClockPort, InteractionBindings, LineupView, NotificationPort, RenderPort, SaveButtonState,
    StoragePort,
};

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices().pop()
    }

    pub fn clear(&self) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.clear();
        }
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice.clone());
        }
    }
}

#[derive(Default)]
struct RenderLog {
    views: Vec<LineupView>,
    effects: Vec<InteractionEffect>,
    save_buttons: Vec<SaveButtonState>,
}

#[derive(Default)]
pub struct RecordingRenderer {
    log: Mutex<RenderLog>,
}

impl RecordingRenderer {
    pub fn render_count(&self) -> usize {
        self.log.lock().map(|l| l.views.len()).unwrap_or(0)
    }

    pub fn last_view(&self) -> Option<LineupView> {
        self.log.lock().ok().and_then(|l| l.views.last().cloned())
    }

    pub fn effects(&self) -> Vec<InteractionEffect> {
        self.log.lock().map(|l| l.effects.clone()).unwrap_or_default()
    }

    pub fn last_save_button(&self) -> Option<SaveButtonState> {
        self.log.lock().ok().and_then(|l| l.save_buttons.last().copied())
    }
}

impl RenderPort for RecordingRenderer {
    fn render(&self, view: &LineupView) {
        if let Ok(mut log) = self.log.lock() {
            log.views.push(view.clone());
        }
    }

    fn apply_effect(&self, effect: &InteractionEffect) {
        if let Ok(mut log) = self.log.lock() {
            log.effects.push(effect.clone());
        }
    }

    fn set_save_button(&self, state: SaveButtonState) {
        if let Ok(mut log) = self.log.lock() {
            log.save_buttons.push(state);
        }
    }
}

/// Call log entries: `(attach?, mode)`.
#[derive(Default)]
pub struct RecordingBindings {
    calls: Mutex<Vec<(bool, InteractionMode)>>,
}

impl RecordingBindings {
    pub fn calls(&self) -> Vec<(bool, InteractionMode)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl InteractionBindings for RecordingBindings {
    fn attach(&self, mode: InteractionMode) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((true, mode));
        }
    }

    fn detach(&self, mode: InteractionMode) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((false, mode));
        }
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl StoragePort for MemoryStorage {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok().and_then(|v| v.get(key).cloned())
    }
}

/// Clock that only moves when told to.
#[derive(Default)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn set_millis(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl ClockPort for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.millis.load(Ordering::SeqCst))
            .single()
            .unwrap_or_default()
    }
}
