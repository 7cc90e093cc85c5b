//! State containers.
//!
//! Each container is a cheap-to-clone handle owning one slice of
//! server-derived state. Views read snapshots and subscribe to a revision
//! channel that ticks after every committed change; there are no ambient
//! events, so whoever needs to react holds a handle and subscribes.
//!
//! Locks guard plain data only and are never held across an `.await`.

pub mod analytics;
pub mod chat;
pub mod documents;

pub use analytics::{AnalyticsState, AnalyticsStore};
pub use chat::{ChatState, ChatStore, ChatWindow, SelectedDocument};
pub use documents::{DocumentsState, DocumentsStore};

use std::sync::Arc;
use tokio::sync::watch;

/// Revision counter shared by a container and its subscribers.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    tx: Arc<watch::Sender<u64>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    /// Bump the revision and wake subscribers.
    pub fn notify(&self) {
        self.tx.send_modify(|revision| *revision = revision.wrapping_add(1));
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.tx.borrow()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
