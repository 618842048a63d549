// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! gRPC binding: lazily connected tonic channels driven through [`RuntimeBridge`].

use crate::connection::{Endpoint, StubConnector};
use crate::error::{ClientError, Result};
use crate::runtime::RuntimeBridge;
use std::marker::PhantomData;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tonic::Status;
use tracing::trace;

/// A channel plus the runtime that drives it
#[derive(Debug, Clone)]
pub struct GrpcChannel {
    grpc: tonic::client::Grpc<Channel>,
    runtime: RuntimeBridge,
}

impl GrpcChannel {
    pub fn new(channel: Channel, runtime: RuntimeBridge) -> Self {
        Self {
            grpc: tonic::client::Grpc::new(channel),
            runtime,
        }
    }

    /// One blocking unary round trip to `path` (`/<package>.<Service>/<Method>`)
    pub fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> std::result::Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        trace!("[RPC] -> {}", path);
        let mut grpc = self.grpc.clone();
        self.runtime.block_on(async move {
            grpc.ready()
                .await
                .map_err(|e| Status::unknown(format!("Service was not ready: {}", e)))?;
            let codec = ProstCodec::<Req, Resp>::default();
            grpc.unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await
            .map(tonic::Response::into_inner)
        })
    }
}

/// Builds gRPC stubs of type `S` for an endpoint
#[derive(Debug, Clone)]
pub struct GrpcConnector<S> {
    runtime: RuntimeBridge,
    _stub: PhantomData<fn() -> S>,
}

impl<S> GrpcConnector<S> {
    pub fn new() -> Result<Self> {
        Ok(Self::with_runtime(RuntimeBridge::new()?))
    }

    pub fn with_runtime(runtime: RuntimeBridge) -> Self {
        Self {
            runtime,
            _stub: PhantomData,
        }
    }
}

impl<S> StubConnector for GrpcConnector<S>
where
    S: From<GrpcChannel> + Send + Sync + 'static,
{
    type Stub = S;

    fn connect(&self, endpoint: &Endpoint) -> Result<S> {
        let uri = endpoint.uri();
        let target = tonic::transport::Endpoint::from_shared(uri.clone()).map_err(|e| {
            ClientError::InvalidEndpoint {
                endpoint: uri,
                reason: e.to_string(),
            }
        })?;
        let channel = {
            let _guard = self.runtime.enter();
            target.connect_lazy()
        };
        Ok(S::from(GrpcChannel::new(channel, self.runtime.clone())))
    }
}
