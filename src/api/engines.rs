use http::Method;
use std::time::Duration;

use super::ApiRequest;
use crate::error::Result;
use crate::response::Response;
use crate::transport::PreparedRequest;

/// Retrieves all engines.
pub struct EnginesList {
    req: ApiRequest,
}

impl EnginesList {
    pub(crate) fn new(req: ApiRequest) -> Self {
        EnginesList { req }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let prepared =
            PreparedRequest::new(Method::GET, "/api/as/v1/engines").timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}

/// Retrieves details of an engine by name.
pub struct EnginesGet {
    req: ApiRequest,
    name: String,
}

impl EnginesGet {
    pub(crate) fn new(req: ApiRequest, name: String) -> Self {
        EnginesGet { req, name }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}", self.name);
        let prepared = PreparedRequest::new(Method::GET, path).timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}

/// Creates an engine.
pub struct EnginesCreate {
    req: ApiRequest,
    name: String,
}

impl EnginesCreate {
    pub(crate) fn new(req: ApiRequest, name: String) -> Self {
        EnginesCreate { req, name }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let body = serde_json::to_vec(&serde_json::json!({ "name": self.name }))?;
        let prepared = PreparedRequest::new(Method::POST, "/api/as/v1/engines")
            .json(body)
            .timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}

/// Deletes an engine by name.
pub struct EnginesDelete {
    req: ApiRequest,
    name: String,
}

impl EnginesDelete {
    pub(crate) fn new(req: ApiRequest, name: String) -> Self {
        EnginesDelete { req, name }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}", self.name);
        let prepared = PreparedRequest::new(Method::DELETE, path).timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}
