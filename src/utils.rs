//! Poison-recovering lock helpers
//!
//! Gathered here so every state container (settings, stores, panels) recovers
//! a poisoned lock the same way: log a warning and keep the inner value.

use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

/// Helper to acquire read lock with poison recovery
pub(crate) fn acquire_read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned: PoisonError<RwLockReadGuard<'_, T>>| {
        warn!("RwLock was poisoned on read, recovering inner value");
        poisoned.into_inner()
    })
}

/// Helper to acquire write lock with poison recovery
pub(crate) fn acquire_write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned: PoisonError<RwLockWriteGuard<'_, T>>| {
        warn!("RwLock was poisoned on write, recovering inner value");
        poisoned.into_inner()
    })
}

/// Helper to lock a mutex with poison recovery
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("Mutex was poisoned, recovering inner value");
        poisoned.into_inner()
    })
}
