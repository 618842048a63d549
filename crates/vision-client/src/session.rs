// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-facade session state: numeric identifiers and the label table.

use crate::error::{ClientError, Result};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::warn;

/// An identifier where zero means "not set".
///
/// Reads never block; a concurrent `set` is observed either fully or not at all.
#[derive(Debug, Default)]
pub struct SessionId(AtomicI64);

impl SessionId {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<i64> {
        match self.0.load(Ordering::Acquire) {
            0 => None,
            id => Some(id),
        }
    }

    /// Store `id`. Storing 0 is the same as [`clear`](Self::clear).
    pub fn set(&self, id: i64) {
        self.0.store(id, Ordering::Release);
    }

    pub fn clear(&self) {
        self.set(0);
    }

    /// Current value, or `MissingSession(name)` when unset
    pub fn require(&self, name: &'static str) -> Result<i64> {
        self.get().ok_or(ClientError::MissingSession(name))
    }
}

/// Label table fetched from the detection service.
///
/// Replaced wholesale: readers hold an `Arc` snapshot, so a query that is
/// translating results keeps a consistent table while a refresh lands.
#[derive(Debug)]
pub struct LabelMapping {
    labels: RwLock<Arc<[String]>>,
}

impl Default for LabelMapping {
    fn default() -> Self {
        Self {
            labels: RwLock::new(Arc::from(Vec::<String>::new())),
        }
    }
}

impl LabelMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<[String]> {
        Arc::clone(&self.labels.read())
    }

    /// Publish a new table and return its length
    pub fn replace(&self, labels: Vec<String>) -> usize {
        let len = labels.len();
        *self.labels.write() = Arc::from(labels);
        len
    }

    pub fn is_empty(&self) -> bool {
        self.labels.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.read().len()
    }
}

/// Resolve a label index against a table snapshot.
///
/// Indices outside the table resolve to their decimal text so a stale table
/// degrades results instead of dropping them.
pub fn resolve_label(labels: &[String], label_id: i32) -> String {
    match usize::try_from(label_id).ok().and_then(|i| labels.get(i)) {
        Some(label) => label.clone(),
        None => {
            warn!(
                "[DETECTION] label id {} outside mapping table of {} entries",
                label_id,
                labels.len()
            );
            label_id.to_string()
        }
    }
}
