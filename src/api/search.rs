use http::Method;
use std::time::Duration;

use super::ApiRequest;
use crate::error::Result;
use crate::response::Response;
use crate::transport::PreparedRequest;

/// Searches an engine.
///
/// The positional query serializes to `{"query": ...}`; a raw [`Search::body`]
/// replaces the whole payload for callers that need filters, facets, or
/// paging beyond the plain query.
pub struct Search {
    req: ApiRequest,
    engine: String,
    query: String,
    body: Option<Vec<u8>>,
}

impl Search {
    pub(crate) fn new(req: ApiRequest, engine: String, query: String) -> Self {
        Search {
            req,
            engine,
            query,
            body: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.req.timeout = Some(timeout);
        self
    }

    /// Raw request body, replacing the `{"query": ...}` payload entirely.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub async fn send(self) -> Result<Response> {
        let path = format!("/api/as/v1/engines/{}/search", self.engine);
        let body = match self.body {
            Some(body) => body,
            None => serde_json::to_vec(&serde_json::json!({ "query": self.query }))?,
        };
        let prepared = PreparedRequest::new(Method::POST, path)
            .json(body)
            .timeout(self.req.timeout);
        self.req.transport.perform(prepared).await
    }
}
