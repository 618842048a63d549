// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Replaceable endpoint/stub binding shared by every facade.
//!
//! The stub is held as a versioned, reference-counted [`StubHandle`]. A call
//! takes its own `Arc` at entry and runs against that snapshot; replacing the
//! endpoint only swaps the slot, so superseded stubs live until the calls
//! already using them finish. Shutdown empties the slot under the same lock.

use crate::error::{ClientError, Result};
use crate::lifecycle::{Lifecycle, LifecycleCell};
use parking_lot::RwLock;
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tonic::codegen::http::uri::Authority;
use tracing::{debug, info};

/// Remote service address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// Accepts a hostname, an IPv4 literal, or an IPv6 literal with or without brackets.
    ///
    /// The host must survive a round trip through URI authority parsing
    /// unchanged, so userinfo, paths, queries and fragments are rejected.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        let raw = host.into();
        let trimmed = raw.trim();
        let host = trimmed
            .strip_prefix('[')
            .and_then(|inner| inner.strip_suffix(']'))
            .filter(|inner| inner.parse::<Ipv6Addr>().is_ok())
            .unwrap_or(trimmed);

        let invalid = |reason: String| ClientError::InvalidEndpoint {
            endpoint: format!("{}:{}", raw, port),
            reason,
        };
        if host.is_empty() {
            return Err(invalid("host is empty".to_string()));
        }
        if host.contains(['[', ']']) {
            return Err(invalid("brackets are only valid around IPv6 literals".to_string()));
        }

        let endpoint = Self {
            host: host.to_string(),
            port,
        };
        let authority = endpoint.authority();
        let parsed = Authority::from_str(&authority).map_err(|e| invalid(e.to_string()))?;
        if parsed.host() != endpoint.uri_host() || parsed.port_u16() != Some(port) {
            return Err(invalid(
                "host must be a bare hostname or IP address".to_string(),
            ));
        }
        Ok(endpoint)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Host as written in a URI (IPv6 literals bracketed)
    fn uri_host(&self) -> String {
        if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        }
    }

    /// `host:port`, `[v6]:port` for IPv6
    pub fn authority(&self) -> String {
        format!("{}:{}", self.uri_host(), self.port)
    }

    /// Plaintext HTTP/2 URI used to open the channel
    pub fn uri(&self) -> String {
        format!("http://{}", self.authority())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.authority())
    }
}

/// Builds a service stub bound to an endpoint.
///
/// Must not block on reachability; connection failures surface on first use.
pub trait StubConnector: Send + Sync {
    type Stub: Send + Sync + 'static;

    fn connect(&self, endpoint: &Endpoint) -> Result<Self::Stub>;
}

/// A stub together with the endpoint it was built for
#[derive(Debug)]
pub struct StubHandle<S> {
    generation: u64,
    endpoint: Endpoint,
    stub: S,
}

impl<S> StubHandle<S> {
    /// Increases by one on every successful `configure`
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn stub(&self) -> &S {
        &self.stub
    }
}

/// Owns the current stub and the facade lifecycle.
pub struct ConnectionHandle<C: StubConnector> {
    service: &'static str,
    connector: C,
    lifecycle: LifecycleCell,
    slot: RwLock<Option<Arc<StubHandle<C::Stub>>>>,
    generation: AtomicU64,
}

impl<C: StubConnector> ConnectionHandle<C> {
    pub fn new(service: &'static str, connector: C) -> Self {
        Self {
            service,
            connector,
            lifecycle: LifecycleCell::new(),
            slot: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Tag used in log lines, e.g. `TRACKING`
    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.get()
    }

    /// Fail with `ShuttingDown` unless the facade is active
    pub fn ensure_active(&self) -> Result<()> {
        if self.lifecycle.is_active() {
            Ok(())
        } else {
            Err(ClientError::ShuttingDown)
        }
    }

    /// Bind to `host:port`, replacing any previous stub.
    ///
    /// The new stub is built outside the lock. In-flight calls keep the stub
    /// they started with.
    pub fn configure(&self, host: &str, port: u16) -> Result<()> {
        self.ensure_active()?;
        let endpoint = Endpoint::new(host, port)?;
        let stub = self.connector.connect(&endpoint)?;

        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let handle = Arc::new(StubHandle {
            generation,
            endpoint: endpoint.clone(),
            stub,
        });

        let previous = {
            let mut slot = self.slot.write();
            // Shutdown may have won the race while the stub was being built
            self.ensure_active()?;
            slot.replace(handle)
        };

        match previous {
            Some(old) => debug!(
                "[{}] endpoint {} replaced by {} (generation {})",
                self.service,
                old.endpoint(),
                endpoint,
                generation
            ),
            None => debug!(
                "[{}] endpoint set to {} (generation {})",
                self.service, endpoint, generation
            ),
        }
        Ok(())
    }

    /// Snapshot of the current stub for one call
    pub fn acquire(&self) -> Result<Arc<StubHandle<C::Stub>>> {
        self.ensure_active()?;
        let slot = self.slot.read();
        self.ensure_active()?;
        slot.as_ref().map(Arc::clone).ok_or(ClientError::NotConfigured)
    }

    /// Currently configured endpoint, if any
    pub fn endpoint(&self) -> Option<Endpoint> {
        self.slot.read().as_ref().map(|handle| handle.endpoint().clone())
    }

    /// Active -> Stopping -> Stopped. Later calls are no-ops.
    pub fn shutdown(&self) {
        if !self.lifecycle.begin_shutdown() {
            return;
        }
        let released = self.slot.write().take();
        self.lifecycle.finish_shutdown();
        drop(released);
        info!("[{}] client shut down", self.service);
    }
}

impl<C: StubConnector> Drop for ConnectionHandle<C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct CountingConnector {
        connects: AtomicUsize,
    }

    impl StubConnector for CountingConnector {
        type Stub = String;

        fn connect(&self, endpoint: &Endpoint) -> Result<String> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            Ok(endpoint.authority())
        }
    }

    fn handle() -> ConnectionHandle<CountingConnector> {
        ConnectionHandle::new(
            "TEST",
            CountingConnector {
                connects: AtomicUsize::new(0),
            },
        )
    }

    #[test]
    fn test_endpoint_formats() {
        let endpoint = Endpoint::new(" localhost ", 50051).unwrap();
        assert_eq!(endpoint.host(), "localhost");
        assert_eq!(endpoint.authority(), "localhost:50051");
        assert_eq!(endpoint.uri(), "http://localhost:50051");
        assert_eq!(endpoint.to_string(), "localhost:50051");
    }

    #[test]
    fn test_endpoint_rejects_malformed_host() {
        assert!(matches!(
            Endpoint::new("", 1),
            Err(ClientError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            Endpoint::new("bad host", 1),
            Err(ClientError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            Endpoint::new("http://x", 1),
            Err(ClientError::InvalidEndpoint { .. })
        ));
        // Each of these would send traffic somewhere other than the stored host
        for host in ["a@b", "a?b", "a#b", "a:80", "[a]"] {
            assert!(
                matches!(
                    Endpoint::new(host, 50051),
                    Err(ClientError::InvalidEndpoint { .. })
                ),
                "{} should be rejected",
                host
            );
        }
    }

    #[test]
    fn test_endpoint_accepts_ipv6_literals() {
        let bare = Endpoint::new("::1", 50051).unwrap();
        assert_eq!(bare.host(), "::1");
        assert_eq!(bare.authority(), "[::1]:50051");
        assert_eq!(bare.uri(), "http://[::1]:50051");
        assert_eq!(bare.to_string(), "[::1]:50051");

        let bracketed = Endpoint::new("[::1]", 50051).unwrap();
        assert_eq!(bracketed, bare);

        let ipv4 = Endpoint::new("10.0.0.7", 9000).unwrap();
        assert_eq!(ipv4.uri(), "http://10.0.0.7:9000");
    }

    #[test]
    fn test_acquire_before_configure_is_not_configured() {
        let handle = handle();
        assert_eq!(handle.acquire().unwrap_err(), ClientError::NotConfigured);
        assert!(handle.endpoint().is_none());
    }

    #[test]
    fn test_configure_replaces_and_bumps_generation() {
        let handle = handle();
        handle.configure("a", 1).unwrap();
        let first = handle.acquire().unwrap();
        handle.configure("b", 2).unwrap();
        let second = handle.acquire().unwrap();

        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 2);
        // The superseded stub is still usable by whoever holds it
        assert_eq!(first.stub(), "a:1");
        assert_eq!(second.stub(), "b:2");
        assert_eq!(handle.endpoint().unwrap().authority(), "b:2");
        assert_eq!(handle.connector.connects.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_shutdown_releases_and_blocks_configure() {
        let handle = handle();
        handle.configure("a", 1).unwrap();
        handle.shutdown();

        assert_eq!(handle.lifecycle(), Lifecycle::Stopped);
        assert!(handle.endpoint().is_none());
        assert_eq!(handle.acquire().unwrap_err(), ClientError::ShuttingDown);
        assert_eq!(handle.configure("b", 2).unwrap_err(), ClientError::ShuttingDown);
        // No stub was built for the refused configure
        assert_eq!(handle.connector.connects.load(Ordering::SeqCst), 1);

        handle.shutdown();
        assert_eq!(handle.lifecycle(), Lifecycle::Stopped);
    }
}
