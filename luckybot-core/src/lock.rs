use crate::types::ChatId;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Advisory per-chat exclusive locks held by the command dispatcher.
///
/// Acquisition never waits: a chat that is already busy yields `None`.
#[derive(Debug, Clone, Default)]
pub struct ChatLocks {
    busy: Arc<Mutex<HashSet<ChatId>>>,
}

impl ChatLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self, chat: ChatId) -> Option<ChatLockGuard> {
        let mut busy = self.busy.lock();
        if !busy.insert(chat) {
            tracing::debug!("Chat {} is already locked", chat);
            return None;
        }

        Some(ChatLockGuard {
            chat,
            busy: self.busy.clone(),
        })
    }

    pub fn is_locked(&self, chat: ChatId) -> bool {
        self.busy.lock().contains(&chat)
    }
}

/// Releases the chat on drop, on every exit path.
#[derive(Debug)]
pub struct ChatLockGuard {
    chat: ChatId,
    busy: Arc<Mutex<HashSet<ChatId>>>,
}

impl ChatLockGuard {
    pub fn chat(&self) -> ChatId {
        self.chat
    }
}

impl Drop for ChatLockGuard {
    fn drop(&mut self) {
        self.busy.lock().remove(&self.chat);
        tracing::debug!("Released lock for chat {}", self.chat);
    }
}
