#![forbid(unsafe_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether removing a node may also remove the ancestors it leaves empty.
///
/// Passed explicitly into every operation that can cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EliminationPolicy {
    pub auto_eliminate: bool,
}

impl EliminationPolicy {
    pub const ENABLED: Self = Self {
        auto_eliminate: true,
    };
    pub const DISABLED: Self = Self {
        auto_eliminate: false,
    };
}

impl Default for EliminationPolicy {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Process-wide administrative toggle for auto elimination.
///
/// Operations take a [`EliminationPolicy`] snapshot once, before they touch the
/// store; flipping the switch never changes a cascade that is already running.
#[derive(Clone, Debug)]
pub struct AutoEliminateSwitch {
    enabled: Arc<AtomicBool>,
}

impl AutoEliminateSwitch {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn get(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Returns the previous value.
    pub fn set(&self, enabled: bool) -> bool {
        self.enabled.swap(enabled, Ordering::SeqCst)
    }

    pub fn policy(&self) -> EliminationPolicy {
        EliminationPolicy {
            auto_eliminate: self.get(),
        }
    }
}

impl Default for AutoEliminateSwitch {
    fn default() -> Self {
        Self::new(true)
    }
}
