//! Transient status notifications with automatic expiry

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// How long a notification stays visible unless dismissed
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        })
    }
}

/// Identifier of a notification, unique within its queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A status message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Default)]
struct QueueState {
    next_id: u64,
    entries: Vec<Notification>,
    expiries: HashMap<NotificationId, JoinHandle<()>>,
}

/// Ordered queue of notifications; each entry removes itself after the TTL
#[derive(Clone)]
pub struct NotificationQueue {
    ttl: Duration,
    state: Arc<Mutex<QueueState>>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    /// Queue whose entries expire after `ttl`
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Arc::new(Mutex::new(QueueState::default())),
        }
    }

    /// Append a notification and schedule its expiry
    ///
    /// Must be called from within a tokio runtime.
    pub async fn push(&self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let mut state = self.state.lock().await;
        state.next_id += 1;
        let id = NotificationId(state.next_id);
        state.entries.push(Notification {
            id,
            kind,
            message: message.into(),
        });

        let deadline = tokio::time::Instant::now() + self.ttl;
        let queue = Arc::downgrade(&self.state);
        let expiry = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(queue) = queue.upgrade() {
                let mut state = queue.lock().await;
                state.entries.retain(|n| n.id != id);
                state.expiries.remove(&id);
            }
        });
        state.expiries.insert(id, expiry);

        id
    }

    /// Remove a notification now and cancel its pending expiry
    ///
    /// Returns whether anything was removed; unknown or expired ids are a no-op.
    pub async fn dismiss(&self, id: NotificationId) -> bool {
        let mut state = self.state.lock().await;
        if let Some(expiry) = state.expiries.remove(&id) {
            expiry.abort();
        }
        let before = state.entries.len();
        state.entries.retain(|n| n.id != id);
        state.entries.len() != before
    }

    /// Current notifications in push order
    pub async fn list(&self) -> Vec<Notification> {
        self.state.lock().await.entries.clone()
    }

    #[cfg(test)]
    async fn pending_expiries(&self) -> usize {
        self.state.lock().await.expiries.len()
    }
}
