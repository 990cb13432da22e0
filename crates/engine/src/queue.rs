//! Pending player actions.
//!
//! Single consumer, any number of producers. Producers append without
//! blocking; the consumer waits on a [`Notify`] instead of polling.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;

use crate::types::GameAction;

#[derive(Debug, Default)]
struct Shared {
    pending: Mutex<VecDeque<GameAction>>,
    ready: Notify,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, VecDeque<GameAction>> {
        // A panic mid-push cannot leave the deque half-written.
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// FIFO of actions waiting for the engine
#[derive(Debug, Default)]
pub struct ActionQueue {
    shared: Arc<Shared>,
}

/// Cloneable producer handle for an [`ActionQueue`]
#[derive(Debug, Clone)]
pub struct ActionSender {
    shared: Arc<Shared>,
}

impl ActionSender {
    /// Append an action; never blocks, never fails
    pub fn push(&self, action: GameAction) {
        self.shared.lock().push_back(action);
        self.shared.ready.notify_one();
    }
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender(&self) -> ActionSender {
        ActionSender {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Append an action; never blocks, never fails
    pub fn push(&self, action: GameAction) {
        self.sender().push(action);
    }

    /// Take the oldest action if there is one
    pub fn try_pop(&self) -> Option<GameAction> {
        self.shared.lock().pop_front()
    }

    /// Wait until an action is queued, then take the oldest one
    pub async fn pop(&self) -> GameAction {
        loop {
            if let Some(action) = self.try_pop() {
                return action;
            }
            // `notify_one` stores a permit when nobody waits, so a push between
            // `try_pop` and here still wakes us.
            self.shared.ready.notified().await;
        }
    }

    /// Copy of the queued actions, oldest first
    pub fn pending(&self) -> Vec<GameAction> {
        self.shared.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.shared.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
