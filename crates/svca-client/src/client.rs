use std::time::Duration;

use async_trait::async_trait;
use svca_proto::{SvcABftRequest, SvcADemoClient, SvcAPublishEventRequest};
use tonic::Request;
use tonic::transport::{Channel, Endpoint};

use crate::error::{ClientError, status_to_client_error};
use crate::remote::RemoteClient;

/// gRPC client for the Service A demo API.
///
/// Owns the tonic channel for its whole lifetime; the channel is closed when
/// the client is dropped.
#[derive(Debug, Clone)]
pub struct SvcAClient {
    client: SvcADemoClient<Channel>,
}

impl SvcAClient {
    /// Connect to Service A at the given endpoint, e.g. "http://127.0.0.1:50051".
    pub async fn connect<D>(dst: D) -> Result<Self, ClientError>
    where
        D: TryInto<Endpoint>,
        D::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::connect_with_endpoint_config(dst, |endpoint| endpoint).await
    }

    /// Connect with a connect and per-request timeout.
    pub async fn connect_with_timeout<D>(dst: D, timeout: Duration) -> Result<Self, ClientError>
    where
        D: TryInto<Endpoint>,
        D::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::connect_with_endpoint_config(dst, |endpoint| {
            endpoint.connect_timeout(timeout).timeout(timeout)
        })
        .await
    }

    async fn connect_with_endpoint_config<D, F>(dst: D, config_fn: F) -> Result<Self, ClientError>
    where
        D: TryInto<Endpoint>,
        D::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
        F: FnOnce(Endpoint) -> Endpoint,
    {
        let endpoint: Endpoint = dst.try_into().map_err(|e| {
            let e: Box<dyn std::error::Error + Send + Sync> = e.into();
            ClientError::from_transport_error(e, "Invalid endpoint")
        })?;

        let endpoint = config_fn(endpoint);
        tracing::debug!(uri = %endpoint.uri(), "Connecting to Service A");

        let client = SvcADemoClient::connect(endpoint)
            .await
            .map_err(|e| ClientError::from_transport_error(e, "Failed to connect"))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl RemoteClient for SvcAClient {
    async fn run_basic_functional_test(
        &mut self,
        request: SvcABftRequest,
    ) -> Result<String, ClientError> {
        tracing::debug!(test_data1 = %request.test_data1, "DoBasicFunctionalTest");
        let response = self
            .client
            .do_basic_functional_test(Request::new(request))
            .await
            .map_err(status_to_client_error)?;

        Ok(response.into_inner().message)
    }

    async fn publish_event(
        &mut self,
        request: SvcAPublishEventRequest,
    ) -> Result<String, ClientError> {
        tracing::debug!(
            pub_sub_kind = %request.pub_sub_kind,
            pub_sub_name = %request.pub_sub_name,
            topic = %request.topic_name,
            "PublishEvent"
        );
        let response = self
            .client
            .publish_event(Request::new(request))
            .await
            .map_err(status_to_client_error)?;

        Ok(response.into_inner().message)
    }
}
