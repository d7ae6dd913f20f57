use http::Method;
use std::time::Duration;

use super::ApiRequest;
use crate::error::Result;
use crate::response::Response;
use crate::transport::PreparedRequest;

/// Checks service liveness. The service reports its own name and version in
/// the response body.
pub struct Health {
    req: ApiRequest,
}

impl Health {
    pub(crate) fn new(req: ApiRequest) -> Self {
        Health { req }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let prepared = PreparedRequest::new(Method::GET, "/api/ent/v1/internal/health")
            .timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}
