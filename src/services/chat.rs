//! Chat panel with a simulated reply
//!
//! Sending a message appends it to the log and schedules a canned reply.
//! Pending replies are owned by the panel and cancelled when it shuts down.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::Result;
use crate::timer::DelayedTask;
use crate::utils::lock;

pub const REPLY_TEXT: &str =
    "Sincronização iniciada! Aguarde enquanto processamos sua solicitação.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            sent_at: Utc::now(),
        }
    }

    pub fn reply() -> Self {
        Self {
            text: REPLY_TEXT.to_string(),
            is_user: false,
            sent_at: Utc::now(),
        }
    }
}

/// Called with each reply once it lands in the log
pub type ReplyListener = Arc<dyn Fn(&ChatMessage) + Send + Sync>;

pub struct ChatPanel {
    messages: Arc<Mutex<Vec<ChatMessage>>>,
    pending: Mutex<Vec<DelayedTask>>,
    reply_delay: Duration,
    listener: Mutex<Option<ReplyListener>>,
}

impl ChatPanel {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            pending: Mutex::new(Vec::new()),
            reply_delay,
            listener: Mutex::new(None),
        }
    }

    pub fn set_reply_listener(&self, listener: ReplyListener) {
        *lock(&self.listener) = Some(listener);
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.messages).clone()
    }

    /// Number of replies still waiting for their timer
    #[cfg(test)]
    fn pending_replies(&self) -> usize {
        lock(&self.pending).iter().filter(|t| !t.is_finished()).count()
    }

    /// Append a user message and schedule the reply.
    ///
    /// Returns `Ok(None)` for blank input, which is ignored.
    pub fn send(&self, text: &str) -> Result<Option<ChatMessage>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let message = ChatMessage::user(text);
        // Held until the message is in, so the reply cannot land first
        let mut messages = lock(&self.messages);

        let log = Arc::downgrade(&self.messages);
        let listener = lock(&self.listener).clone();
        let task = DelayedTask::schedule("chat reply", self.reply_delay, move || {
            // Panel already gone
            let Some(log) = log.upgrade() else {
                return;
            };
            let reply = ChatMessage::reply();
            lock(&log).push(reply.clone());
            if let Some(listener) = listener {
                listener(&reply);
            }
        })?;
        messages.push(message.clone());
        drop(messages);

        let mut pending = lock(&self.pending);
        pending.retain(|t| !t.is_finished());
        pending.push(task);

        Ok(Some(message))
    }

    /// Empty the log. Replies already scheduled still arrive.
    pub fn clear(&self) {
        lock(&self.messages).clear();
    }

    /// Cancel every pending reply
    pub fn shutdown(&self) {
        let mut pending = lock(&self.pending);
        let cancelled = pending.iter().filter(|t| !t.is_finished()).count();
        for task in pending.iter_mut() {
            task.cancel();
        }
        pending.clear();
        if cancelled > 0 {
            tracing::debug!(cancelled, "Cancelled pending chat replies");
        }
    }
}

impl Drop for ChatPanel {
    fn drop(&mut self) {
        self.shutdown();
    }
}
