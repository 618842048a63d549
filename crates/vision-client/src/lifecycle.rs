// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Facade lifecycle: Active until shutdown, then permanently Stopped.

use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle phase of a facade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Lifecycle {
    Active = 0,
    Stopping = 1,
    Stopped = 2,
}

impl Lifecycle {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Lifecycle::Active,
            1 => Lifecycle::Stopping,
            _ => Lifecycle::Stopped,
        }
    }
}

/// Atomic cell holding a [`Lifecycle`]. Transitions only move forward.
#[derive(Debug)]
pub(crate) struct LifecycleCell(AtomicU8);

impl LifecycleCell {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(Lifecycle::Active as u8))
    }

    pub(crate) fn get(&self) -> Lifecycle {
        Lifecycle::from_u8(self.0.load(Ordering::Acquire))
    }

    pub(crate) fn is_active(&self) -> bool {
        self.get() == Lifecycle::Active
    }

    /// Active -> Stopping. Returns false if another caller already began shutdown.
    pub(crate) fn begin_shutdown(&self) -> bool {
        self.0
            .compare_exchange(
                Lifecycle::Active as u8,
                Lifecycle::Stopping as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    pub(crate) fn finish_shutdown(&self) {
        self.0.store(Lifecycle::Stopped as u8, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_active() {
        let cell = LifecycleCell::new();
        assert!(cell.is_active());
        assert_eq!(cell.get(), Lifecycle::Active);
    }

    #[test]
    fn test_shutdown_only_begins_once() {
        let cell = LifecycleCell::new();
        assert!(cell.begin_shutdown());
        assert!(!cell.begin_shutdown());
        assert_eq!(cell.get(), Lifecycle::Stopping);
        cell.finish_shutdown();
        assert_eq!(cell.get(), Lifecycle::Stopped);
        assert!(!cell.begin_shutdown());
    }
}
