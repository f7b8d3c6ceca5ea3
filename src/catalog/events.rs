//! Catalog events — what happened to each dispatched action.
//!
//! Purely observational. The TUI keeps a bounded log of these for the
//! Activity tab; nothing reads them back into the catalog.

use super::action::Action;

/// Outcome of dispatching one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// The action changed the snapshot.
    Applied { action: Action, at: u64 },
    /// The action was a silent no-op (empty, duplicate, missing selection,
    /// out-of-range index).
    Ignored { action: Action, at: u64 },
}

impl CatalogEvent {
    pub fn action(&self) -> &Action {
        match self {
            CatalogEvent::Applied { action, .. } | CatalogEvent::Ignored { action, .. } => action,
        }
    }

    /// Unix timestamp (seconds).
    pub fn at(&self) -> u64 {
        match self {
            CatalogEvent::Applied { at, .. } | CatalogEvent::Ignored { at, .. } => *at,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, CatalogEvent::Applied { .. })
    }
}

/// Current time in seconds since Unix epoch.
pub(crate) fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
