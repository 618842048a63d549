//! One facade per remote service.
//!
//! Each module holds the stub trait for its service, the gRPC stub, the
//! request builders and result translation, and the public client.

/// Accessors and lifecycle methods every facade shares.
///
/// The facade must hold a `connection: ConnectionHandle<C>` field, and a
/// `task_id: SessionId` field when invoked with `task_id`. `with_connector`
/// stays with each facade since their state differs.
macro_rules! facade_common {
    (@base $client:ident, $stub:ident) => {
        impl $client {
            /// Client backed by gRPC
            pub fn new() -> $crate::error::Result<Self> {
                Ok(Self::with_connector($crate::grpc::GrpcConnector::new()?))
            }

            #[cfg(feature = "config")]
            pub fn from_config(
                config: &::vision_config::ServiceEndpointConfig,
            ) -> $crate::error::Result<Self> {
                let client = Self::new()?;
                client.apply_config(config)?;
                Ok(client)
            }
        }

        impl<C> $client<C>
        where
            C: $crate::connection::StubConnector,
            C::Stub: $stub,
        {
            pub fn set_address(&self, host: &str, port: u16) -> $crate::error::Result<()> {
                self.connection.configure(host, port)
            }

            pub fn endpoint(&self) -> Option<$crate::connection::Endpoint> {
                self.connection.endpoint()
            }

            pub fn lifecycle(&self) -> $crate::lifecycle::Lifecycle {
                self.connection.lifecycle()
            }

            pub fn shutdown(&self) {
                self.connection.shutdown();
            }
        }
    };
    ($client:ident, $stub:ident) => {
        facade_common!(@base $client, $stub);

        impl<C> $client<C>
        where
            C: $crate::connection::StubConnector,
            C::Stub: $stub,
        {
            /// Set the address from a config section. Task ids do not apply here.
            #[cfg(feature = "config")]
            pub fn apply_config(
                &self,
                config: &::vision_config::ServiceEndpointConfig,
            ) -> $crate::error::Result<()> {
                self.set_address(&config.host, config.port)
            }
        }
    };
    ($client:ident, $stub:ident, task_id) => {
        facade_common!(@base $client, $stub);

        impl<C> $client<C>
        where
            C: $crate::connection::StubConnector,
            C::Stub: $stub,
        {
            /// Set address and, when present, task id from a config section
            #[cfg(feature = "config")]
            pub fn apply_config(
                &self,
                config: &::vision_config::ServiceEndpointConfig,
            ) -> $crate::error::Result<()> {
                self.set_address(&config.host, config.port)?;
                if let Some(task_id) = config.task_id {
                    self.set_task_id(task_id)?;
                }
                Ok(())
            }

            pub fn set_task_id(&self, task_id: i64) -> $crate::error::Result<()> {
                self.connection.ensure_active()?;
                self.task_id.set(task_id);
                ::tracing::debug!("[{}] task id set to {}", self.connection.service(), task_id);
                Ok(())
            }

            pub fn task_id(&self) -> Option<i64> {
                self.task_id.get()
            }
        }
    };
}

pub mod behavior_recognition;
pub mod image_harmony;
pub mod target_detection;
pub mod target_tracking;

pub use behavior_recognition::{
    BehaviorRecognitionClient, BehaviorRecognitionStub, GrpcBehaviorRecognitionStub,
};
pub use image_harmony::{GrpcImageHarmonyStub, ImageHarmonyClient, ImageHarmonyStub, JPEG_QUALITY_PARAM};
pub use target_detection::{GrpcTargetDetectionStub, TargetDetectionClient, TargetDetectionStub};
pub use target_tracking::{GrpcTargetTrackingStub, TargetTrackingClient, TargetTrackingStub};
