//! In-flight lock for form submissions
//!
//! A page holds one [`SubmitLock`]. Each attempt takes a [`SubmitGuard`] and
//! keeps it until the attempt settles; while it is held further attempts are
//! refused. The guard releases the lock when dropped, so every outcome
//! (including an early return) frees it.

use leptos::prelude::*;

/// Reactive "attempt in flight" flag
#[derive(Debug, Clone)]
pub struct SubmitLock {
    busy: ArcRwSignal<bool>,
}

impl Default for SubmitLock {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitLock {
    pub fn new() -> Self {
        Self {
            busy: ArcRwSignal::new(false),
        }
    }

    /// Start an attempt, or `None` if one is already running
    pub fn try_begin(&self) -> Option<SubmitGuard> {
        if self.busy.get_untracked() {
            return None;
        }
        self.busy.set(true);
        Some(SubmitGuard {
            busy: self.busy.clone(),
        })
    }

    /// Tracked read, for disabling the submit button
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

/// Held for the duration of one attempt
#[derive(Debug)]
pub struct SubmitGuard {
    busy: ArcRwSignal<bool>,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
