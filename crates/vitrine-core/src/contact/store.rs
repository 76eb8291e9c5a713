use tokio::sync::Mutex;
use tracing::debug;

use super::models::{ContactMessage, NewContactMessage};
use crate::{Error, Result};

/// Volatile, process-lifetime store for contact messages
///
/// Identifiers come from a counter that starts at 1 and only moves forward.
/// Each store is independent, so tests can create as many as they need.
#[derive(Debug)]
pub struct ContactStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    next_id: u64,
    messages: Vec<ContactMessage>,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a store whose first assigned id is `next_id`
    pub fn starting_at(next_id: u64) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                next_id,
                messages: Vec::new(),
            }),
        }
    }

    /// Store a validated message and return it with its assigned id
    pub async fn create(&self, data: NewContactMessage) -> Result<ContactMessage> {
        let mut inner = self.inner.lock().await;

        let id = inner.next_id;
        let next = id
            .checked_add(1)
            .ok_or_else(|| Error::Store("contact id space exhausted".to_string()))?;

        let message = ContactMessage::new(id, data);
        inner.messages.push(message.clone());
        inner.next_id = next;

        debug!(id, total = inner.messages.len(), "Stored contact message");
        Ok(message)
    }

    /// All stored messages in insertion order
    pub async fn list(&self) -> Vec<ContactMessage> {
        self.inner.lock().await.messages.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.messages.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
