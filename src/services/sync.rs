//! Simulated "sync now" and the recent activity feed

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::Result;
use crate::timer::DelayedTask;
use crate::utils::lock;

/// Services the popup links together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyncService {
    Antigravity,
    GitHub,
    Lovable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Success,
    Pending,
    Syncing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncItem {
    pub id: String,
    pub action: String,
    pub source: SyncService,
    pub target: SyncService,
    pub status: SyncStatus,
    pub occurred_at: DateTime<Utc>,
}

impl SyncItem {
    /// Time label relative to `now`: `Agora` under a minute, then minutes, then hours
    pub fn relative_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.occurred_at);
        if elapsed < ChronoDuration::minutes(1) {
            "Agora".to_string()
        } else if elapsed < ChronoDuration::hours(1) {
            format!("{} min", elapsed.num_minutes())
        } else {
            format!("{} h", elapsed.num_hours())
        }
    }
}

/// A feed row as sent to the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub action: String,
    pub source: SyncService,
    pub target: SyncService,
    pub status: SyncStatus,
    pub time: String,
}

fn seeded_activity(now: DateTime<Utc>) -> Vec<SyncItem> {
    vec![
        SyncItem {
            id: "1".to_string(),
            action: "Push alterações".to_string(),
            source: SyncService::Antigravity,
            target: SyncService::GitHub,
            status: SyncStatus::Success,
            occurred_at: now,
        },
        SyncItem {
            id: "2".to_string(),
            action: "Pull atualização".to_string(),
            source: SyncService::GitHub,
            target: SyncService::Lovable,
            status: SyncStatus::Success,
            occurred_at: now - ChronoDuration::minutes(2),
        },
        SyncItem {
            id: "3".to_string(),
            action: "Sync pendente".to_string(),
            source: SyncService::Lovable,
            target: SyncService::GitHub,
            status: SyncStatus::Pending,
            occurred_at: now - ChronoDuration::minutes(5),
        },
    ]
}

/// Called when a simulated sync finishes
pub type SyncListener = Arc<dyn Fn() + Send + Sync>;

pub struct SyncPanel {
    syncing: Arc<AtomicBool>,
    task: Mutex<Option<DelayedTask>>,
    duration: Duration,
    listener: Mutex<Option<SyncListener>>,
    activity: Vec<SyncItem>,
}

impl SyncPanel {
    pub fn new(duration: Duration) -> Self {
        Self::with_activity(duration, seeded_activity(Utc::now()))
    }

    pub fn with_activity(duration: Duration, activity: Vec<SyncItem>) -> Self {
        Self {
            syncing: Arc::new(AtomicBool::new(false)),
            task: Mutex::new(None),
            duration,
            listener: Mutex::new(None),
            activity,
        }
    }

    pub fn set_finished_listener(&self, listener: SyncListener) {
        *lock(&self.listener) = Some(listener);
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::SeqCst)
    }

    /// Start a simulated sync.
    ///
    /// Returns `Ok(false)` if one is already running; the button is disabled
    /// while busy.
    pub fn start_sync(&self) -> Result<bool> {
        if self
            .syncing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Ok(false);
        }

        let flag = Arc::downgrade(&self.syncing);
        let listener = lock(&self.listener).clone();
        let scheduled = DelayedTask::schedule("sync", self.duration, move || {
            let Some(flag) = flag.upgrade() else {
                return;
            };
            flag.store(false, Ordering::SeqCst);
            tracing::debug!("Simulated sync finished");
            if let Some(listener) = listener {
                listener();
            }
        });

        match scheduled {
            Ok(task) => {
                *lock(&self.task) = Some(task);
                tracing::info!(duration_ms = self.duration.as_millis() as u64, "Sync started");
                Ok(true)
            }
            Err(e) => {
                self.syncing.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    /// Cancel a running sync and clear the busy flag
    pub fn shutdown(&self) {
        if let Some(mut task) = lock(&self.task).take() {
            task.cancel();
        }
        self.syncing.store(false, Ordering::SeqCst);
    }

    pub fn recent_activity(&self, now: DateTime<Utc>) -> Vec<ActivityEntry> {
        self.activity
            .iter()
            .map(|item| ActivityEntry {
                id: item.id.clone(),
                action: item.action.clone(),
                source: item.source,
                target: item.target,
                status: item.status,
                time: item.relative_label(now),
            })
            .collect()
    }
}

impl Drop for SyncPanel {
    fn drop(&mut self) {
        self.shutdown();
    }
}
