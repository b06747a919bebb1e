//! The remote call seam used by the command loop.

use async_trait::async_trait;
use svca_proto::{SvcABftRequest, SvcAPublishEventRequest};

use crate::ClientError;

/// Remote operations the command loop can invoke on Service A.
///
/// The gRPC implementation lives in [`crate::client::SvcAClient`]; tests substitute
/// a recording fake.
#[async_trait]
pub trait RemoteClient: Send {
    /// Run the basic functional test and return the reply message.
    async fn run_basic_functional_test(
        &mut self,
        request: SvcABftRequest,
    ) -> Result<String, ClientError>;

    /// Publish one event and return the reply message.
    async fn publish_event(
        &mut self,
        request: SvcAPublishEventRequest,
    ) -> Result<String, ClientError>;
}
