// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Sync-over-async bridge for the blocking facades.
//!
//! Reuses an ambient multi-thread Tokio runtime when constructed inside one,
//! otherwise owns a small private runtime.

use crate::error::{ClientError, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::{Builder, EnterGuard, Handle, Runtime, RuntimeFlavor};
use tokio::task::block_in_place;

#[derive(Debug, Clone)]
pub struct RuntimeBridge {
    handle: Handle,
    runtime: Option<Arc<Runtime>>,
}

impl RuntimeBridge {
    pub fn new() -> Result<Self> {
        if let Ok(handle) = Handle::try_current() {
            if handle.runtime_flavor() == RuntimeFlavor::MultiThread {
                return Ok(Self {
                    handle,
                    runtime: None,
                });
            }
        }
        Self::owned()
    }

    /// Always use a private runtime, even inside an ambient one
    pub fn owned() -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("vision-client-rpc")
            .enable_all()
            .build()
            .map_err(|e| ClientError::Runtime(format!("failed to start RPC runtime: {}", e)))?;
        Ok(Self {
            handle: runtime.handle().clone(),
            runtime: Some(Arc::new(runtime)),
        })
    }

    /// True when this bridge runs its own runtime
    pub fn is_owned(&self) -> bool {
        self.runtime.is_some()
    }

    /// Enter the runtime context (needed to spawn channel workers)
    pub fn enter(&self) -> EnterGuard<'_> {
        self.handle.enter()
    }

    /// Drive `future` to completion on the calling thread.
    pub fn block_on<F>(&self, future: F) -> F::Output
    where
        F: Future + Send,
        F::Output: Send,
    {
        match Handle::try_current().map(|ambient| ambient.runtime_flavor()) {
            Ok(RuntimeFlavor::MultiThread) => block_in_place(|| self.handle.block_on(future)),
            // A current-thread runtime cannot block in place
            Ok(_) => std::thread::scope(|scope| {
                scope
                    .spawn(|| self.handle.block_on(future))
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            }),
            Err(_) => self.handle.block_on(future),
        }
    }
}

impl Drop for RuntimeBridge {
    fn drop(&mut self) {
        // Dropping a runtime from async context panics; shut it down in the background
        if let Some(runtime) = self.runtime.take().and_then(|rt| Arc::try_unwrap(rt).ok()) {
            runtime.shutdown_background();
        }
    }
}
