#![forbid(unsafe_code)]

mod lifecycle;
mod stdio;

pub(crate) use stdio::run_stdio;

use bubble_core::{AutoEliminateSwitch, EliminationPolicy};
use bubble_storage::{SqliteStore, StoreError};

pub(crate) struct McpServer {
    initialized: bool,
    pub(crate) store: SqliteStore,
    auto_eliminate: AutoEliminateSwitch,
}

impl McpServer {
    pub(crate) fn new(store: SqliteStore, auto_eliminate: AutoEliminateSwitch) -> Self {
        Self {
            initialized: false,
            store,
            auto_eliminate,
        }
    }

    /// Snapshot of the auto-eliminate flag, taken once per tool call.
    pub(crate) fn policy(&self) -> EliminationPolicy {
        self.auto_eliminate.policy()
    }

    pub(crate) fn auto_eliminate(&self) -> &AutoEliminateSwitch {
        &self.auto_eliminate
    }

    pub(crate) fn reset_store(&mut self) -> Result<(), StoreError> {
        self.store.reset()
    }
}
