//! Interaction modality selection by viewport width.

use serde::{Deserialize, Serialize};

/// Widths below this use tap mode.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 1280;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    Drag,
    Tap,
}

impl InteractionMode {
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Tap
        } else {
            Self::Drag
        }
    }
}

impl std::fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drag => write!(f, "drag"),
            Self::Tap => write!(f, "tap"),
        }
    }
}
